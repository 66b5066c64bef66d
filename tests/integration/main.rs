//! Integration tests for the evolution engine service.
//!
//! Each test binds the real router to an ephemeral port and drives it over
//! HTTP with reqwest. Simulated work delays are shortened so the suite
//! stays fast; request semantics are unchanged.

use evolution_engine::api::{create_router, AppState};
use evolution_engine::config::Config;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Config with near-zero simulated work.
fn test_config() -> Config {
    Config {
        listen_host: "127.0.0.1".to_string(),
        analyze_delay_ms: 5,
        optimize_delay_ms: 5,
        ..Config::default()
    }
}

/// Bind the service to an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let state = AppState::new(&test_config());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    format!("http://{addr}")
}

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body")
}

#[tokio::test]
async fn root_lists_exactly_five_endpoints() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let json = get_json(&client, format!("{base}/")).await;

    assert_eq!(json["name"], "AI-Seed Evolution Engine");
    assert_eq!(json["status"], "running");

    let endpoints = json["endpoints"].as_object().unwrap();
    let mut keys: Vec<_> = endpoints.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["analyze", "health", "optimize", "status", "suggestions"]
    );
}

#[tokio::test]
async fn health_reports_healthy_engine() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/health")).send().await.unwrap();
    assert!(response.status().is_success());

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["engine_status"], true);
    assert_eq!(json["uptime"], "0m");
}

#[tokio::test]
async fn optimize_echoes_path_id_and_fixed_gain() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/optimize"))
        .json(&json!({"path_id": "abc"}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["path_id"], "abc");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["improvements"]["efficiency_gain"], 12.5);
    assert!(json["optimization_id"]
        .as_str()
        .unwrap()
        .starts_with("opt_"));
}

#[tokio::test]
async fn optimize_without_body_defaults_path_id() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/optimize"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["path_id"], "unknown");
}

#[tokio::test]
async fn analyze_accepts_garbage_body() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/analyze"))
        .body("definitely not json")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["paths_analyzed"], 12);
    assert_eq!(json["optimizations_found"], 3);
}

#[tokio::test]
async fn unknown_route_returns_404_with_seven_endpoints() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/unknown-route"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Endpoint not found");
    assert_eq!(json["available_endpoints"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn suggestions_returns_three_distinct_ids() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let json = get_json(&client, format!("{base}/suggestions")).await;
    assert_eq!(json["total_count"], 3);

    let ids: Vec<_> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["suggestion_1", "suggestion_2", "suggestion_3"]);
}

#[tokio::test]
async fn concurrent_optimizations_lose_no_updates() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let before = get_json(&client, format!("{base}/status")).await;
    let start = before["metrics"]["total_optimizations"].as_u64().unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        let url = format!("{base}/optimize");
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({"path_id": format!("path-{i}")}))
                .send()
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().status().is_success());
    }

    let after = get_json(&client, format!("{base}/status")).await;
    assert_eq!(
        after["metrics"]["total_optimizations"].as_u64().unwrap(),
        start + 8
    );
}

#[tokio::test]
async fn status_uptime_is_monotonic() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let first = get_json(&client, format!("{base}/status")).await;
    let second = get_json(&client, format!("{base}/status")).await;

    let a = first["uptime_seconds"].as_f64().unwrap();
    let b = second["uptime_seconds"].as_f64().unwrap();
    assert!(b >= a, "uptime went backwards: {a} -> {b}");
}

#[tokio::test]
async fn metrics_reports_counters_and_performance() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let json = get_json(&client, format!("{base}/metrics")).await;

    assert_eq!(json["engine_metrics"]["total_optimizations"], 47);
    assert_eq!(json["engine_metrics"]["suggestions_issued"], 23);
    assert_eq!(json["status"]["cycle"], 23);
    assert_eq!(json["performance"]["avg_optimization_time"], "45 seconds");
    assert_eq!(json["performance"]["success_rate"], 94.2);
}
