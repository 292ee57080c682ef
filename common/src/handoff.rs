//! マッチ画面からメール生成画面への引き継ぎ
//!
//! 教授と学生入力は一つの `Handoff` として扱い、解決も一回で行う。
//!
//! 解決の優先順位:
//! 1. URLクエリ（`professor` と `input`）
//! 2. 永続ストアの保存済み引き継ぎ
//! 3. デフォルト教授 + 空入力
//!
//! URL側の `input` が無い場合は空文字列になり、ストアの古い入力とは混ざらない。

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::professor::{default_professor, ProfessorRecord};
use crate::store::{HandoffStore, KeyValueStore};

/// 永続ストア上のキー
pub const HANDOFF_KEY: &str = "profpilot.handoff";

/// 現在の引き継ぎ形式バージョン
pub const HANDOFF_VERSION: u32 = 1;

/// メール生成画面へのパス
pub const GENERATE_PAGE_PATH: &str = "/generate";

pub const PROFESSOR_PARAM: &str = "professor";
pub const INPUT_PARAM: &str = "input";

/// 教授と学生入力の組
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    pub version: u32,
    pub professor: ProfessorRecord,
    pub student_input: String,
}

impl Handoff {
    pub fn new(professor: ProfessorRecord, student_input: impl Into<String>) -> Self {
        Self {
            version: HANDOFF_VERSION,
            professor,
            student_input: student_input.into(),
        }
    }

    /// 何も選択されていない場合の引き継ぎ
    pub fn fallback() -> Self {
        Self::new(default_professor(), "")
    }
}

/// URLクエリから取り出した生の値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandoffParams {
    pub professor: Option<String>,
    pub input: Option<String>,
}

/// どこから引き継ぎを得たか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffSource {
    Url,
    Store,
    Default,
}

impl HandoffSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandoffSource::Url => "url",
            HandoffSource::Store => "store",
            HandoffSource::Default => "default",
        }
    }
}

/// 解決中に見つかった問題（解決自体は続行する）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandoffIssue {
    #[error("professor query parameter is not a valid record: {0}")]
    MalformedUrlProfessor(String),

    #[error("stored selection is not a valid record: {0}")]
    MalformedStored(String),

    #[error("stored selection has unsupported version {0}")]
    UnsupportedStoredVersion(u32),

    #[error("persistent store unavailable: {0}")]
    StorageUnavailable(String),
}

/// 解決結果
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub handoff: Handoff,
    pub source: HandoffSource,
    pub issues: Vec<HandoffIssue>,
}

/// クエリ文字列を解析（先頭の `?` は任意）
pub fn parse_query(query: &str) -> HandoffParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = HandoffParams::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PROFESSOR_PARAM if params.professor.is_none() => {
                params.professor = Some(value.into_owned());
            }
            INPUT_PARAM if params.input.is_none() => {
                params.input = Some(value.into_owned());
            }
            _ => {}
        }
    }

    params
}

/// 「メールを直接生成」リンクを組み立て
pub fn generate_href(professor: &ProfessorRecord, student_input: &str) -> Result<String> {
    let json = serde_json::to_string(professor)?;
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(PROFESSOR_PARAM, &json)
        .append_pair(INPUT_PARAM, student_input)
        .finish();
    Ok(format!("{}?{}", GENERATE_PAGE_PATH, query))
}

/// URL → ストア → デフォルトの順で引き継ぎを一度に解決
pub fn resolve<S: KeyValueStore>(params: &HandoffParams, store: &HandoffStore<S>) -> Resolution {
    let mut issues = Vec::new();

    if let Some(raw) = params.professor.as_deref().filter(|s| !s.trim().is_empty()) {
        match serde_json::from_str::<ProfessorRecord>(raw) {
            Ok(professor) => {
                let input = params.input.clone().unwrap_or_default();
                return Resolution {
                    handoff: Handoff::new(professor, input),
                    source: HandoffSource::Url,
                    issues,
                };
            }
            Err(e) => issues.push(HandoffIssue::MalformedUrlProfessor(e.to_string())),
        }
    }

    match store.load() {
        Ok(Some(handoff)) => {
            return Resolution {
                handoff,
                source: HandoffSource::Store,
                issues,
            };
        }
        Ok(None) => {}
        Err(Error::UnsupportedVersion(v)) => issues.push(HandoffIssue::UnsupportedStoredVersion(v)),
        Err(Error::Json(e)) => issues.push(HandoffIssue::MalformedStored(e.to_string())),
        Err(e) => issues.push(HandoffIssue::StorageUnavailable(e.to_string())),
    }

    Resolution {
        handoff: Handoff::fallback(),
        source: HandoffSource::Default,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn matched(name: &str) -> ProfessorRecord {
        let mut professor = ProfessorRecord::new(name);
        professor.department = Some("Biology".to_string());
        professor.bio = Some("Protein folding".to_string());
        professor.similarity = Some(0.77);
        professor
    }

    fn url_params(professor: &ProfessorRecord, input: Option<&str>) -> HandoffParams {
        HandoffParams {
            professor: Some(serde_json::to_string(professor).unwrap()),
            input: input.map(str::to_string),
        }
    }

    #[test]
    fn test_href_round_trips_through_query() {
        let professor = matched("Dr. Ünïcode & Co");
        let href = generate_href(&professor, "genomics + ML, 100% keen?").unwrap();
        assert!(href.starts_with("/generate?professor="));

        let query = href.split_once('?').map(|(_, q)| q).unwrap();
        let params = parse_query(query);
        let parsed: ProfessorRecord =
            serde_json::from_str(params.professor.as_deref().unwrap()).unwrap();
        assert_eq!(parsed, professor);
        assert_eq!(params.input.as_deref(), Some("genomics + ML, 100% keen?"));
    }

    #[test]
    fn test_parse_query_percent_encoded() {
        let params = parse_query("?input=deep%20learning&other=1");
        assert_eq!(params.input.as_deref(), Some("deep learning"));
        assert!(params.professor.is_none());
    }

    #[test]
    fn test_url_takes_precedence_over_store() {
        let store = HandoffStore::new(MemoryStore::new());
        store
            .save(&Handoff::new(matched("Dr. Stored"), "stored text"))
            .unwrap();

        let from_url = matched("Dr. Url");
        let resolution = resolve(&url_params(&from_url, Some("url text")), &store);
        assert_eq!(resolution.source, HandoffSource::Url);
        assert_eq!(resolution.handoff.professor, from_url);
        assert_eq!(resolution.handoff.student_input, "url text");
        assert!(resolution.issues.is_empty());
    }

    #[test]
    fn test_url_professor_without_input_does_not_use_stored_text() {
        let store = HandoffStore::new(MemoryStore::new());
        store
            .save(&Handoff::new(matched("Dr. Stored"), "stale text"))
            .unwrap();

        let resolution = resolve(&url_params(&matched("Dr. Url"), None), &store);
        assert_eq!(resolution.source, HandoffSource::Url);
        assert_eq!(resolution.handoff.student_input, "");
    }

    #[test]
    fn test_store_used_without_url() {
        let store = HandoffStore::new(MemoryStore::new());
        let saved = Handoff::new(matched("Dr. Stored"), "stored text");
        store.save(&saved).unwrap();

        let resolution = resolve(&HandoffParams::default(), &store);
        assert_eq!(resolution.source, HandoffSource::Store);
        assert_eq!(resolution.handoff, saved);
    }

    #[test]
    fn test_url_input_alone_is_ignored() {
        // 教授なしの input だけではURL経路は成立しない
        let store = HandoffStore::new(MemoryStore::new());
        let params = HandoffParams {
            professor: None,
            input: Some("orphan".to_string()),
        };
        let resolution = resolve(&params, &store);
        assert_eq!(resolution.source, HandoffSource::Default);
        assert_eq!(resolution.handoff.student_input, "");
    }

    #[test]
    fn test_default_when_nothing_available() {
        let store = HandoffStore::new(MemoryStore::new());
        let resolution = resolve(&HandoffParams::default(), &store);
        assert_eq!(resolution.source, HandoffSource::Default);
        assert_eq!(resolution.handoff.professor.name, "Dr. Jane Doe");
        assert_eq!(
            resolution.handoff.professor.department.as_deref(),
            Some("Computer Science")
        );
        assert_eq!(resolution.handoff.student_input, "");
    }

    #[test]
    fn test_malformed_url_falls_through_to_store() {
        let store = HandoffStore::new(MemoryStore::new());
        let saved = Handoff::new(matched("Dr. Stored"), "stored text");
        store.save(&saved).unwrap();

        let params = HandoffParams {
            professor: Some("{broken".to_string()),
            input: Some("url text".to_string()),
        };
        let resolution = resolve(&params, &store);
        assert_eq!(resolution.source, HandoffSource::Store);
        assert_eq!(resolution.handoff, saved);
        assert!(matches!(
            resolution.issues.as_slice(),
            [HandoffIssue::MalformedUrlProfessor(_)]
        ));
    }

    #[test]
    fn test_malformed_store_falls_back_to_default() {
        let memory = MemoryStore::new();
        memory.set(HANDOFF_KEY, "not json at all").unwrap();
        let store = HandoffStore::new(memory);

        let resolution = resolve(&HandoffParams::default(), &store);
        assert_eq!(resolution.source, HandoffSource::Default);
        assert!(matches!(
            resolution.issues.as_slice(),
            [HandoffIssue::MalformedStored(_)]
        ));
    }

    #[test]
    fn test_unsupported_stored_version_reported() {
        let memory = MemoryStore::new();
        memory.set(HANDOFF_KEY, r#"{"version": 2}"#).unwrap();
        let store = HandoffStore::new(memory);

        let resolution = resolve(&HandoffParams::default(), &store);
        assert_eq!(resolution.source, HandoffSource::Default);
        assert_eq!(
            resolution.issues,
            vec![HandoffIssue::UnsupportedStoredVersion(2)]
        );
    }

    #[test]
    fn test_empty_professor_param_treated_as_absent() {
        let store = HandoffStore::new(MemoryStore::new());
        let resolution = resolve(&parse_query("professor=&input=x"), &store);
        assert_eq!(resolution.source, HandoffSource::Default);
        assert!(resolution.issues.is_empty());
    }
}
