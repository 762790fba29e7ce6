use std::fs;

use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tempfile::TempDir;
use tower::util::ServiceExt;

use hts_api::{routes, state::AppState};
use hts_config::{Catalog, Config, Search, Service};

const SAMPLE_CSV: &str = "\
HTS Number,Indent,Description,Unit of Quantity,General Rate of Duty,Special Rate of Duty
0101.21.0000,2,Purebred breeding horses,\"[\"\"No.\"\"]\",Free,
8471.30.0100,2,\"Portable automatic data processing machines, laptop computers\",\"[\"\"No.\"\"]\",Free,
8471.30.0200,2,Other computer units,\"[\"\"No.\"\"]\",Free,
8517.12.0000,1,Telephones for cellular networks,\"[\"\"No.\"\"]\",Free,
";

fn test_config(dir: &TempDir, csv: &str) -> Config {
	let path = dir.path().join("hts.csv");

	fs::write(&path, csv).expect("Failed to write test catalog.");

	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		catalog: Catalog { path },
		search: Search { min_token_len: 2, max_alternatives: 3 },
	}
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");

	serde_json::from_slice(&bytes).expect("Failed to parse response.")
}

fn search_request(payload: serde_json::Value) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri("/v1/tariff/search")
		.header("content-type", "application/json")
		.body(Body::from(payload.to_string()))
		.expect("Failed to build request.")
}

#[tokio::test]
async fn health_ok() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_returns_primary_and_alternatives() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let payload = serde_json::json!({ "query": "laptop computer" });
	let response = app.oneshot(search_request(payload)).await.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["primary"]["entry"]["code"], "8471.30.0100");
	assert_eq!(json["primary"]["confidence"], 100);
	assert_eq!(json["alternatives"][0]["entry"]["code"], "8471.30.0200");
	assert_eq!(json["alternatives"][0]["confidence"], 50);
	assert_eq!(json["candidate_count"], 2);
}

#[tokio::test]
async fn search_by_code_prefix() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let payload = serde_json::json!({ "query": "84-71", "match_by_code": true });
	let response = app.oneshot(search_request(payload)).await.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["primary"]["entry"]["code"], "8471.30.0100");
	assert_eq!(json["primary"]["confidence"], 100);
	assert_eq!(json["alternatives"][0]["entry"]["code"], "8471.30.0200");
	assert_eq!(json["candidate_count"], 2);
}

#[tokio::test]
async fn search_without_a_match_returns_the_sentinel() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let payload = serde_json::json!({ "query": "zeppelin" });
	let response = app.oneshot(search_request(payload)).await.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["primary"]["entry"]["code"], "0000.00");
	assert_eq!(json["primary"]["entry"]["description"], "No matching HTS code found");
	assert_eq!(json["primary"]["confidence"], 0);
	assert_eq!(json["alternatives"], serde_json::json!([]));
}

#[tokio::test]
async fn rejects_empty_query() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let payload = serde_json::json!({ "query": "  " });
	let response = app.oneshot(search_request(payload)).await.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = read_json(response).await;

	assert_eq!(json["error_code"], "invalid_query");
	assert_eq!(json["fields"][0], "$.query");
}

#[tokio::test]
async fn details_returns_the_entry() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/v1/tariff/codes/8517.12.0000")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call details.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["entry"]["code"], "8517.12.0000");
	assert_eq!(json["entry"]["description"], "Telephones for cellular networks");
}

#[tokio::test]
async fn details_for_unknown_code_is_not_found() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let app = routes::router(AppState::new(test_config(&dir, SAMPLE_CSV)));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/v1/tariff/codes/9999.99.9999")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call details.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let json = read_json(response).await;

	assert_eq!(json["error_code"], "not_found");
}

#[tokio::test]
async fn missing_catalog_is_service_unavailable() {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let mut config = test_config(&dir, SAMPLE_CSV);

	config.catalog.path = dir.path().join("absent.csv");

	let app = routes::router(AppState::new(config));
	let payload = serde_json::json!({ "query": "laptop" });
	let response = app.oneshot(search_request(payload)).await.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

	let json = read_json(response).await;

	assert_eq!(json["error_code"], "catalog_unavailable");
}
