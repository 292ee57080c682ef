use profpilot_common::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfPilotError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("API呼び出しエラー: {0}")]
    Api(#[from] ApiError),

    #[error("引き継ぎデータエラー: {0}")]
    Handoff(#[from] profpilot_common::Error),

    #[error("教授レコードが不正: {0}")]
    InvalidProfessor(String),

    #[error("選択番号が範囲外です: {index}（候補 {count} 件）")]
    SelectionOutOfRange { index: usize, count: usize },

    #[error("研究内容が入力されていません。`profpilot match \"...\"` のように指定してください")]
    EmptyInput,

    #[error("入力プロンプトエラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProfPilotError>;
