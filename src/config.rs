use crate::error::{ProfPilotError, Result};
use profpilot_common::{normalize_base_url, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "PROFPILOT_API_URL";

const CONFIG_FILE_NAME: &str = "config.json";
const STORE_FILE_NAME: &str = "store.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProfPilotError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("profpilot"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// 引き継ぎデータを保存するファイル
    pub fn store_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(STORE_FILE_NAME))
    }

    /// 接続先ベースURL
    ///
    /// 優先順位: コマンドライン > 環境変数 > 設定ファイル > デフォルト
    pub fn api_base_url(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        resolve_base_url(cli_override, env.as_deref(), self.api_base_url.as_deref())
    }

    pub fn set_api_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ProfPilotError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.api_base_url = Some(normalize_base_url(&url));
        self.save()
    }
}

fn resolve_base_url(cli: Option<&str>, env: Option<&str>, configured: Option<&str>) -> String {
    [cli, env, configured]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
