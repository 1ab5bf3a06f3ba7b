// tests/api_tests.rs

use std::sync::Arc;
use std::time::Duration;

use simulado_backend::bank::QuestionBank;
use simulado_backend::config::Config;
use simulado_backend::routes;
use simulado_backend::sessions::SimuladoSessions;
use simulado_backend::state::AppState;
use simulado_backend::store::{MemoryResultStore, ResultStore};
use simulado_backend::utils::jwt::sign_jwt;

const TEST_SECRET: &str = "test_secret_for_integration_tests";

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL and the in-memory result store, so persistence side
/// effects can be asserted without a database.
async fn spawn_app() -> (String, Arc<MemoryResultStore>) {
    let config = Config {
        database_url: "postgres://unused/in-memory-tests".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
    };

    let store = Arc::new(MemoryResultStore::new());

    let state = AppState {
        bank: Arc::new(QuestionBank::detran()),
        sessions: SimuladoSessions::new(),
        store: store.clone() as Arc<dyn ResultStore>,
        config,
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, store)
}

fn bearer(user_id: i64) -> String {
    let token = sign_jwt(user_id, "student", TEST_SECRET, 600).expect("Failed to sign test token");
    format!("Bearer {}", token)
}

#[tokio::test]
async fn unknown_route_returns_404() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn simulado_routes_require_a_token() {
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/simulado/start", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 401);

    let response = client
        .get(format!("{}/api/simulado", address))
        .header("Authorization", "Bearer not-a-real-token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn state_is_404_before_any_simulado() {
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/simulado", address))
        .header("Authorization", bearer(1))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn full_simulado_flow() {
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    let auth = bearer(42);

    // 1. Start
    let response = client
        .post(format!("{}/api/simulado/start", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed");
    assert_eq!(response.status().as_u16(), 201);

    let view: serde_json::Value = response.json().await.unwrap();
    assert_eq!(view["phase"], "playing");
    assert_eq!(view["total_questions"], 30);
    assert_eq!(view["current_index"], 0);
    assert!(view["remaining_seconds"].as_u64().unwrap() <= 3600);
    assert!(view["question"]["prompt"].as_str().is_some());
    // The correct answer is never exposed before confirmation.
    assert!(view["correct_option"].is_null());
    assert!(view["question"].get("correct_option").is_none());

    // 2. Select an answer, then try to change it after confirming
    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/answer", address))
        .header("Authorization", &auth)
        .json(&serde_json::json!({ "option_index": 1 }))
        .send()
        .await
        .expect("Answer failed")
        .json()
        .await
        .unwrap();
    assert_eq!(view["selected_option"], 1);
    assert_eq!(view["confirmed"], false);

    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/confirm", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Confirm failed")
        .json()
        .await
        .unwrap();
    assert_eq!(view["confirmed"], true);
    assert!(view["correct_option"].is_number());

    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/answer", address))
        .header("Authorization", &auth)
        .json(&serde_json::json!({ "option_index": 3 }))
        .send()
        .await
        .expect("Answer failed")
        .json()
        .await
        .unwrap();
    // Confirmed answers are locked; the re-selection is silently ignored.
    assert_eq!(view["selected_option"], 1);

    // 3. Navigation round trip keeps per-question state
    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/next", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Next failed")
        .json()
        .await
        .unwrap();
    assert_eq!(view["current_index"], 1);
    assert!(view["selected_option"].is_null());

    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/previous", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Previous failed")
        .json()
        .await
        .unwrap();
    assert_eq!(view["current_index"], 0);
    assert_eq!(view["selected_option"], 1);
    assert_eq!(view["confirmed"], true);

    // 4. Finish
    let response = client
        .post(format!("{}/api/simulado/finish", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Finish failed");
    assert_eq!(response.status().as_u16(), 200);

    let result: serde_json::Value = response.json().await.unwrap();
    assert_eq!(result["total_questions"], 30);
    assert!(result["passed"].is_boolean());
    assert!(result["score_percent"].is_number());
    assert!(result["category_breakdown"].as_array().unwrap().len() >= 1);
}

#[tokio::test]
async fn finish_is_idempotent_and_persists_one_row() {
    let (address, store) = spawn_app().await;
    let client = reqwest::Client::new();
    let auth = bearer(7);

    client
        .post(format!("{}/api/simulado/start", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed");

    let first: serde_json::Value = client
        .post(format!("{}/api/simulado/finish", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Finish failed")
        .json()
        .await
        .unwrap();

    // A duplicate finished transition returns the same result...
    let second: serde_json::Value = client
        .post(format!("{}/api/simulado/finish", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Second finish failed")
        .json()
        .await
        .unwrap();
    assert_eq!(first["correct_count"], second["correct_count"]);
    assert_eq!(first["seconds_used"], second["seconds_used"]);

    // ...and the store sees exactly one insert. The write is fire-and-forget,
    // so give the spawned task a moment to land.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(store.inserted(), 1);

    let history: serde_json::Value = client
        .get(format!("{}/api/simulado/history", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("History failed")
        .json()
        .await
        .unwrap();
    let rows = history.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_id"], 7);
    assert_eq!(rows[0]["nota"], first["score_percent"]);
}

#[tokio::test]
async fn abandon_cancels_without_persisting() {
    let (address, store) = spawn_app().await;
    let client = reqwest::Client::new();
    let auth = bearer(9);

    client
        .post(format!("{}/api/simulado/start", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed");

    let response = client
        .delete(format!("{}/api/simulado", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Abandon failed");
    assert_eq!(response.status().as_u16(), 204);

    let response = client
        .get(format!("{}/api/simulado", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("State failed");
    assert_eq!(response.status().as_u16(), 404);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(store.inserted(), 0);
}

#[tokio::test]
async fn start_respects_requested_size_and_rejects_zero() {
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    let auth = bearer(3);

    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/start?questions=5", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed")
        .json()
        .await
        .unwrap();
    assert_eq!(view["total_questions"], 5);

    // Oversized requests degrade to the whole bank.
    let view: serde_json::Value = client
        .post(format!("{}/api/simulado/start?questions=500", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed")
        .json()
        .await
        .unwrap();
    assert_eq!(view["total_questions"], 30);

    let response = client
        .post(format!("{}/api/simulado/start?questions=0", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed");
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn out_of_range_option_index_is_rejected() {
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    let auth = bearer(5);

    client
        .post(format!("{}/api/simulado/start", address))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Start failed");

    let response = client
        .post(format!("{}/api/simulado/answer", address))
        .header("Authorization", &auth)
        .json(&serde_json::json!({ "option_index": 9 }))
        .send()
        .await
        .expect("Answer failed");
    assert_eq!(response.status().as_u16(), 400);
}
