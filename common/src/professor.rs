//! 教授レコードの型定義
//!
//! マッチングサービスの返却レコードとフォールバック用デフォルトを
//! 同一スキーマで扱う。`name` 以外はすべて任意項目。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 旧形式のレコードで紹介文を持つキー
const LEGACY_BIO_KEY: &str = "summary";

/// 上位マッチとして表示する件数
pub const TOP_MATCH_COUNT: usize = 3;

/// 教授レコード
///
/// 受信したレコードは変更せず、丸ごとクローンして次へ渡す。
/// 未知のフィールドは `extra` に保持され、送信時にそのまま戻る。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// 紹介文。`summary` しか持たないレコードは `extra` 側に残る
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recent_publications: Vec<String>,

    /// 類似度 (0.0〜1.0)。マッチング結果由来のレコードのみ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfessorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: None,
            title: None,
            bio: None,
            recent_publications: Vec::new(),
            similarity: None,
            extra: Map::new(),
        }
    }

    pub fn department_or_empty(&self) -> &str {
        self.department.as_deref().unwrap_or("")
    }

    /// 表示用の紹介文（`bio` がなければ `summary`）
    pub fn bio_text(&self) -> Option<&str> {
        self.bio
            .as_deref()
            .or_else(|| self.extra.get(LEGACY_BIO_KEY).and_then(Value::as_str))
    }

    pub fn bio_or_empty(&self) -> &str {
        self.bio_text().unwrap_or("")
    }

    /// 表示用のマッチスコア（例: "87.3%"）
    pub fn score_label(&self) -> Option<String> {
        self.similarity.map(format_similarity)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 選択がない場合に使うデフォルト教授
pub fn default_professor() -> ProfessorRecord {
    ProfessorRecord {
        name: "Dr. Jane Doe".to_string(),
        department: Some("Computer Science".to_string()),
        title: Some("Associate Professor of Computer Science".to_string()),
        bio: Some("Researches machine learning and natural language processing".to_string()),
        recent_publications: vec![
            "Understanding Contextual Embeddings in Transformers".to_string(),
            "Efficient Fine-Tuning Techniques for LLMs".to_string(),
        ],
        similarity: None,
        extra: Map::new(),
    }
}

/// 類似度をパーセント表記に変換（小数1桁）
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0)
}

/// マッチ結果を上位3件と残りに分割
///
/// 受信順を保持し、並べ替えは行わない。
pub fn partition_matches(matches: &[ProfessorRecord]) -> (&[ProfessorRecord], &[ProfessorRecord]) {
    matches.split_at(matches.len().min(TOP_MATCH_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<ProfessorRecord> {
        (0..n).map(|i| ProfessorRecord::new(format!("Prof {}", i))).collect()
    }

    #[test]
    fn test_partition_counts() {
        for n in 0..7 {
            let all = records(n);
            let (top, rest) = partition_matches(&all);
            assert_eq!(top.len(), n.min(3), "n={}", n);
            assert_eq!(rest.len(), n.saturating_sub(3), "n={}", n);
        }
    }

    #[test]
    fn test_partition_keeps_order() {
        let all = records(5);
        let (top, rest) = partition_matches(&all);
        let names: Vec<&str> = top.iter().chain(rest).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Prof 0", "Prof 1", "Prof 2", "Prof 3", "Prof 4"]);
    }

    #[test]
    fn test_format_similarity() {
        assert_eq!(format_similarity(0.8734), "87.3%");
        assert_eq!(format_similarity(1.0), "100.0%");
        assert_eq!(format_similarity(0.0), "0.0%");
    }

    #[test]
    fn test_deserialize_match_record() {
        let json = r#"{
            "name": "Dr. Ada Lovelace",
            "department": "Mathematics",
            "bio": "Analytical engines",
            "similarity": 0.91
        }"#;
        let record: ProfessorRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "Dr. Ada Lovelace");
        assert_eq!(record.department_or_empty(), "Mathematics");
        assert_eq!(record.score_label().as_deref(), Some("91.0%"));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_summary_used_when_bio_missing() {
        let json = r#"{"name": "Dr. X", "summary": "Robotics"}"#;
        let record: ProfessorRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.bio, None);
        assert_eq!(record.bio_text(), Some("Robotics"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["summary"], "Robotics");
        assert!(value.get("bio").is_none());
    }

    #[test]
    fn test_bio_and_summary_together() {
        let json = r#"{"name": "B", "bio": "y", "summary": "z"}"#;
        let record: ProfessorRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.bio_text(), Some("y"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["bio"], "y");
        assert_eq!(value["summary"], "z");
    }

    #[test]
    fn test_null_publications_decode_as_empty() {
        let json = r#"{"name": "Dr. N", "recent_publications": null, "department": null}"#;
        let record: ProfessorRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(record.recent_publications.is_empty());
        assert_eq!(record.department, None);
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let json = r#"{"name": "Dr. Y", "lab_url": "https://lab.example", "h_index": 42}"#;
        let record: ProfessorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra.get("h_index"), Some(&Value::from(42)));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["lab_url"], "https://lab.example");
        assert_eq!(value["h_index"], 42);
    }

    #[test]
    fn test_name_is_required() {
        let result = serde_json::from_str::<ProfessorRecord>(r#"{"department": "Physics"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_professor() {
        let professor = default_professor();
        assert_eq!(professor.name, "Dr. Jane Doe");
        assert_eq!(professor.department.as_deref(), Some("Computer Science"));
        assert!(professor.similarity.is_none());
        assert_eq!(professor.recent_publications.len(), 2);
        assert!(professor.score_label().is_none());
    }
}
