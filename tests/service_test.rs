//! サービス呼び出しテスト
//!
//! axum のモックサーバを立ててマッチング/メール生成の通信を検証

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use profpilot::client::ApiClient;
use profpilot::commands;
use profpilot::error::ProfPilotError;
use profpilot::store::FileStore;
use profpilot_common::{partition_matches, ApiError, HandoffParams, HandoffSource, HandoffStore};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

type Captured = Arc<Mutex<Vec<Value>>>;

async fn spawn_mock(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind失敗");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn mock_service(captured: Captured, match_count: usize) -> Router {
    Router::new()
        .route(
            "/match",
            post(move |Json(body): Json<Value>| async move {
                let input = body["student_input"].as_str().unwrap_or_default().to_string();
                let top_matches: Vec<Value> = (0..match_count)
                    .map(|i| {
                        json!({
                            "name": format!("Prof {}", i + 1),
                            "department": "CS",
                            "bio": format!("works on {}", input),
                            "similarity": 0.95 - i as f64 * 0.05,
                        })
                    })
                    .collect();
                Json(json!({ "top_matches": top_matches }))
            }),
        )
        .route(
            "/generate-email",
            post(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                captured.lock().unwrap().push(body);
                Json(json!({ "email": "Dear X" }))
            }),
        )
        .with_state(captured)
}

/// マッチ結果は受信順で上位3件と残りに分かれる
#[tokio::test]
async fn test_match_keeps_order_and_partitions() {
    let base = spawn_mock(mock_service(Captured::default(), 5)).await;
    let client = ApiClient::new(&base, 5).unwrap();

    let matches = commands::find_matches(&client, "graph learning").await.unwrap();
    let names: Vec<&str> = matches.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Prof 1", "Prof 2", "Prof 3", "Prof 4", "Prof 5"]);
    assert_eq!(matches[0].bio.as_deref(), Some("works on graph learning"));

    let (top, additional) = partition_matches(&matches);
    assert_eq!(top.len(), 3);
    assert_eq!(additional.len(), 2);
    assert_eq!(additional[0].name, "Prof 4");
}

/// 0件でもエラーにならない
#[tokio::test]
async fn test_match_zero_results() {
    let base = spawn_mock(mock_service(Captured::default(), 0)).await;
    let client = ApiClient::new(&base, 5).unwrap();

    let matches = commands::find_matches(&client, "anything").await.unwrap();
    assert!(matches.is_empty());
}

/// 空入力はリクエストを送らない
#[tokio::test]
async fn test_match_empty_input() {
    let client = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
    let err = commands::find_matches(&client, "   ").await.unwrap_err();
    assert!(matches!(err, ProfPilotError::EmptyInput));
}

/// 生成サービスの返却テキストがそのまま得られる
#[tokio::test]
async fn test_generate_returns_exact_email() {
    let captured = Captured::default();
    let base = spawn_mock(mock_service(captured.clone(), 0)).await;
    let client = ApiClient::new(&base, 5).unwrap();

    let dir = tempdir().expect("Failed to create temp dir");
    let store = HandoffStore::new(FileStore::new(dir.path().join("store.json")));

    let (resolution, email) =
        commands::generate_email(&client, &store, &HandoffParams::default(), None)
            .await
            .unwrap();
    assert_eq!(email, "Dear X");
    assert_eq!(resolution.source, HandoffSource::Default);

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["student_input"], "");
    assert_eq!(bodies[0]["professor"]["name"], "Dr. Jane Doe");
    assert_eq!(bodies[0]["professor"]["bio"], "Researches machine learning and natural language processing");
}

/// 保存済みの選択を使い、入力の上書きも反映される。再生成は毎回リクエストする
#[tokio::test]
async fn test_generate_uses_stored_selection_and_regenerates() {
    let captured = Captured::default();
    let base = spawn_mock(mock_service(captured.clone(), 4)).await;
    let client = ApiClient::new(&base, 5).unwrap();

    let dir = tempdir().expect("Failed to create temp dir");
    let store = HandoffStore::new(FileStore::new(dir.path().join("store.json")));

    let matches = commands::find_matches(&client, "bioinformatics").await.unwrap();
    commands::select_match(&store, &matches, 4, "bioinformatics").unwrap();

    let params = HandoffParams::default();
    commands::generate_email(&client, &store, &params, None).await.unwrap();
    commands::generate_email(&client, &store, &params, Some("edited text"))
        .await
        .unwrap();

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["professor"]["name"], "Prof 4");
    assert_eq!(bodies[0]["professor"]["similarity"], json!(0.95 - 3.0_f64 * 0.05));
    assert_eq!(bodies[0]["student_input"], "bioinformatics");
    assert_eq!(bodies[1]["student_input"], "edited text");
}

/// 接続できない場合は Transport エラー（パニックしない）
#[tokio::test]
async fn test_match_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr), 2).unwrap();
    let err = commands::find_matches(&client, "systems").await.unwrap_err();
    assert!(matches!(err, ProfPilotError::Api(ApiError::Transport(_))));
}

/// HTTPエラーは Status、JSON不正は Decode
#[tokio::test]
async fn test_status_and_decode_errors() {
    let app = Router::new()
        .route("/match", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/generate-email", post(|| async { "not json" }));
    let base = spawn_mock(app).await;
    let client = ApiClient::new(&base, 5).unwrap();

    let err = client.match_professors("x").await.unwrap_err();
    assert_eq!(err, ApiError::Status(500));

    let professor = profpilot_common::default_professor();
    let err = client.generate_email("x", &professor).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
