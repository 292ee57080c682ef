//! ProfPilot Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod api;
pub mod cancel;
pub mod error;
pub mod handoff;
pub mod professor;
pub mod store;

pub use api::{
    endpoint_url, normalize_base_url, ApiError, GenerateRequest, GenerateResponse,
    MatchRequest, MatchResponse, DEFAULT_API_BASE_URL, GENERATE_EMAIL_PATH, MATCH_PATH,
};
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use handoff::{
    generate_href, parse_query, resolve, Handoff, HandoffIssue, HandoffParams, HandoffSource,
    Resolution, HANDOFF_KEY, HANDOFF_VERSION,
};
pub use professor::{default_professor, format_similarity, partition_matches, ProfessorRecord};
pub use store::{HandoffStore, KeyValueStore, MemoryStore};
