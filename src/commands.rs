//! サブコマンドの処理本体
//!
//! 入出力（スピナー・対話プロンプト・標準出力）は main 側で行い、
//! ここではサービス呼び出しと引き継ぎの保存・解決だけを扱う。

use crate::client::{until_interrupted, ApiClient};
use crate::error::{ProfPilotError, Result};
use profpilot_common::{
    resolve, Handoff, HandoffParams, HandoffStore, KeyValueStore, ProfessorRecord, Resolution,
};
use tracing::{info, warn};

/// 研究内容でマッチング
pub async fn find_matches(client: &ApiClient, student_input: &str) -> Result<Vec<ProfessorRecord>> {
    if student_input.trim().is_empty() {
        return Err(ProfPilotError::EmptyInput);
    }
    let matches = until_interrupted(client.match_professors(student_input)).await?;
    info!(count = matches.len(), "マッチ取得");
    Ok(matches)
}

/// 候補の `number` 番目（1始まり）を入力と一緒に保存
pub fn select_match<S: KeyValueStore>(
    store: &HandoffStore<S>,
    matches: &[ProfessorRecord],
    number: usize,
    student_input: &str,
) -> Result<Handoff> {
    let professor = number
        .checked_sub(1)
        .and_then(|i| matches.get(i))
        .ok_or(ProfPilotError::SelectionOutOfRange {
            index: number,
            count: matches.len(),
        })?;
    save_selection(store, professor.clone(), student_input)
}

/// 教授と入力の組を上書き保存
pub fn save_selection<S: KeyValueStore>(
    store: &HandoffStore<S>,
    professor: ProfessorRecord,
    student_input: &str,
) -> Result<Handoff> {
    let handoff = Handoff::new(professor, student_input);
    store.save(&handoff)?;
    info!(professor = %handoff.professor.name, "選択を保存");
    Ok(handoff)
}

/// `--professor` に渡されたJSONを教授レコードとして読む
pub fn parse_professor_arg(raw: &str) -> Result<ProfessorRecord> {
    serde_json::from_str(raw).map_err(|e| ProfPilotError::InvalidProfessor(e.to_string()))
}

/// 引き継ぎを解決し、問題があればログに残す
pub fn resolve_handoff<S: KeyValueStore>(params: &HandoffParams, store: &HandoffStore<S>) -> Resolution {
    let resolution = resolve(params, store);
    for issue in &resolution.issues {
        warn!("{}", issue);
    }
    resolution
}

/// 引き継ぎを解決してメールを生成
///
/// `student_input_override` が与えられた場合は解決済みの入力より優先する。
pub async fn generate_email<S: KeyValueStore>(
    client: &ApiClient,
    store: &HandoffStore<S>,
    params: &HandoffParams,
    student_input_override: Option<&str>,
) -> Result<(Resolution, String)> {
    let mut resolution = resolve_handoff(params, store);
    if let Some(text) = student_input_override {
        resolution.handoff.student_input = text.to_string();
    }

    let handoff = &resolution.handoff;
    let email = until_interrupted(client.generate_email(&handoff.student_input, &handoff.professor)).await?;
    Ok((resolution, email))
}
