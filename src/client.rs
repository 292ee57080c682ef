//! マッチング/メール生成サービスのHTTPクライアント

use profpilot_common::{
    endpoint_url, ApiError, GenerateRequest, GenerateResponse, MatchRequest, MatchResponse,
    ProfessorRecord, GENERATE_EMAIL_PATH, MATCH_PATH,
};
use reqwest::Client;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// POST /match
    pub async fn match_professors(&self, student_input: &str) -> Result<Vec<ProfessorRecord>, ApiError> {
        let body = self
            .post_json(MATCH_PATH, &MatchRequest { student_input })
            .await?;
        let response = MatchResponse::from_json(&body)?;
        debug!(count = response.top_matches.len(), "matches received");
        Ok(response.top_matches)
    }

    /// POST /generate-email
    pub async fn generate_email(
        &self,
        student_input: &str,
        professor: &ProfessorRecord,
    ) -> Result<String, ApiError> {
        let body = self
            .post_json(
                GENERATE_EMAIL_PATH,
                &GenerateRequest {
                    student_input,
                    professor,
                },
            )
            .await?;
        Ok(GenerateResponse::from_json(&body)?.email)
    }

    async fn post_json<T: Serialize>(&self, path: &str, payload: &T) -> Result<String, ApiError> {
        let url = endpoint_url(&self.base_url, path);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "service returned error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Ctrl-C で保留中のリクエストを打ち切る
pub async fn until_interrupted<T, F>(request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    until_cancelled(request, async {
        // シグナルを待てない環境では打ち切らない
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// `cancel` が先に完了したらリクエストの結果を捨てて `Cancelled` を返す
pub async fn until_cancelled<T, F, C>(request: F, cancel: C) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = cancel => Err(ApiError::Cancelled),
        result = request => result,
    }
}
