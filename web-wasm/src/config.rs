//! 接続先設定
//!
//! ビルド時の環境変数 `PROFPILOT_API_URL` を使い、未設定ならデフォルトURL。

use profpilot_common::{normalize_base_url, DEFAULT_API_BASE_URL};

pub fn api_base_url() -> String {
    normalize_base_url(option_env!("PROFPILOT_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}
