use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profpilot")]
#[command(about = "研究室マッチング・教授宛メール生成クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 研究内容から教授をマッチング
    Match {
        /// 研究内容・経歴・目標
        #[arg(required = true)]
        input: String,

        /// N番目の候補を選択して保存（1始まり）
        #[arg(short, long)]
        select: Option<usize>,

        /// 対話的に候補を選ぶ
        #[arg(short, long, conflicts_with = "select")]
        pick: bool,

        /// 各候補のメール生成リンクを表示
        #[arg(long)]
        links: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 教授レコードを直接指定して保存
    Select {
        /// 教授レコード（JSON）
        #[arg(long, required = true)]
        professor: String,

        /// 研究内容
        #[arg(short, long, default_value = "")]
        input: String,
    },

    /// 選択中の教授宛メールを生成
    Generate {
        /// 教授レコード（JSON）。省略時は保存済みの選択を使用
        #[arg(long)]
        professor: Option<String>,

        /// 研究内容。省略時は引き継いだ入力を使用
        #[arg(short, long)]
        input: Option<String>,

        /// 生成したメールの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 現在の引き継ぎ内容を表示
    Show {
        /// 保存済みの選択を削除
        #[arg(long)]
        clear: bool,
    },

    /// 設定管理
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
