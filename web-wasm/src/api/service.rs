//! マッチング/メール生成サービス連携（fetch）

use profpilot_common::{
    endpoint_url, ApiError, GenerateRequest, GenerateResponse, MatchRequest, MatchResponse,
    ProfessorRecord, GENERATE_EMAIL_PATH, MATCH_PATH,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

use crate::config::api_base_url;

fn transport(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// JSONをPOSTしてレスポンス本文を文字列で返す（共通処理）
async fn post_json<T: Serialize>(
    path: &str,
    payload: &T,
    signal: Option<&AbortSignal>,
) -> Result<String, ApiError> {
    let url = endpoint_url(&api_base_url(), path);
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Transport(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    opts.set_signal(signal);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            if signal.map(|s| s.aborted()).unwrap_or(false) {
                ApiError::Cancelled
            } else {
                transport(e)
            }
        })?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".into()))
}

/// POST /match
pub async fn match_professors(
    student_input: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<ProfessorRecord>, ApiError> {
    let body = post_json(MATCH_PATH, &MatchRequest { student_input }, signal).await?;
    Ok(MatchResponse::from_json(&body)?.top_matches)
}

/// POST /generate-email
pub async fn generate_email(
    student_input: &str,
    professor: &ProfessorRecord,
    signal: Option<&AbortSignal>,
) -> Result<String, ApiError> {
    let request = GenerateRequest {
        student_input,
        professor,
    };
    let body = post_json(GENERATE_EMAIL_PATH, &request, signal).await?;
    Ok(GenerateResponse::from_json(&body)?.email)
}
