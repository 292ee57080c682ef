//! マッチング/メール生成サービスのワイヤ形式
//!
//! 通信そのものは各クライアント（reqwest / fetch）が担当し、
//! ここではリクエスト・レスポンスの型とURL組み立て、デコードのみ扱う。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::professor::ProfessorRecord;

/// 接続先が設定されていない場合のベースURL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const MATCH_PATH: &str = "/match";
pub const GENERATE_EMAIL_PATH: &str = "/generate-email";

/// サービス呼び出しの失敗理由
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("service returned HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

/// POST /match リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct MatchRequest<'a> {
    pub student_input: &'a str,
}

/// POST /match レスポンス
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub top_matches: Vec<ProfessorRecord>,
}

/// POST /generate-email リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub student_input: &'a str,
    pub professor: &'a ProfessorRecord,
}

/// POST /generate-email レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub email: String,
}

impl MatchResponse {
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl GenerateResponse {
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// ベースURL末尾のスラッシュと空白を除去
///
/// 空文字列の場合はデフォルトURLを返す。
pub fn normalize_base_url(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// ベースURLとエンドポイントパスを結合
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base_url(base), path)
}
