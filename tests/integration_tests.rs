// Integration tests for the DevShowcase Match HTTP API

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use devshowcase_match::config::MatchingSettings;
use devshowcase_match::core::Matcher;
use devshowcase_match::error::handle_json_payload_error;
use devshowcase_match::models::{CandidateStack, RankResponse};
use devshowcase_match::routes::{configure_routes, AppState};
use devshowcase_match::services::{CacheKey, ScoreCache};

fn app_state(cache: bool) -> AppState {
    AppState {
        matcher: Matcher::default(),
        matching: MatchingSettings {
            default_limit: 2,
            max_limit: 3,
            min_score: 0,
        },
        cache: cache.then(|| Arc::new(ScoreCache::new(100, 60))),
    }
}

macro_rules! service {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = service!(app_state(true));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_compatibility_endpoint() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({
            "candidateSkills": ["go", "RUST", "Python"],
            "requiredSkills": ["Go", "Rust", "C++"],
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "score": 67,
            "matchedSkills": ["Go", "Rust"],
            "missingSkills": ["C++"],
        })
    );
}

#[actix_web::test]
async fn test_compatibility_empty_required() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "candidateSkills": [], "requiredSkills": [] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "score": 100, "matchedSkills": [], "missingSkills": [] }));
}

#[actix_web::test]
async fn test_compatibility_rejects_non_string_entries() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "candidateSkills": [1, 2], "requiredSkills": ["Go"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
    assert_eq!(body["statusCode"], 400);
}

#[actix_web::test]
async fn test_compatibility_rejects_empty_label() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "candidateSkills": [""], "requiredSkills": ["Go"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
}

#[actix_web::test]
async fn test_rank_uses_default_limit() {
    let app = service!(app_state(true));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/rank")
        .set_json(json!({
            "requiredSkills": ["Rust", "Go"],
            "candidates": [
                { "id": "a", "skills": ["rust"] },
                { "id": "b", "skills": ["rust", "go"] },
                { "id": "c", "skills": [] },
            ],
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 3);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["id"], "b");
    assert_eq!(matches[0]["score"], 100);
    assert_eq!(matches[1]["id"], "a");
    assert_eq!(matches[1]["missingSkills"], json!(["Go"]));
}

#[actix_web::test]
async fn test_rank_caps_limit_and_applies_min_score() {
    let app = service!(app_state(false));

    let candidates: Vec<Value> = (0..6)
        .map(|i| {
            let skills: Vec<&str> = if i % 2 == 0 { vec!["Go"] } else { vec![] };
            json!({ "id": i.to_string(), "skills": skills })
        })
        .collect();

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/rank")
        .set_json(json!({
            "requiredSkills": ["Go"],
            "candidates": candidates,
            "limit": 50,
            "minScore": 100,
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["0", "2", "4"]);
}

fn docker_rank_payload() -> Value {
    json!({
        "requiredSkills": ["Docker"],
        "candidates": [{ "id": "x", "skills": ["docker"] }],
    })
}

/// Key the handler uses for `docker_rank_payload` under `app_state` (limit 2, min score 0)
fn docker_rank_key() -> String {
    let candidates = vec![CandidateStack {
        id: "x".to_string(),
        skills: vec!["docker".to_string()],
    }];
    CacheKey::rank(&["Docker".to_string()], &candidates, 2, 0).unwrap()
}

#[actix_web::test]
async fn test_rank_result_is_cached_and_served() {
    let state = app_state(true);
    let cache = state.cache.clone().unwrap();
    let app = service!(state);

    let first: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/compatibility/rank")
            .set_json(docker_rank_payload())
            .to_request(),
    )
    .await;
    assert_eq!(first["matches"][0]["score"], 100);

    // Stored under the key derived from the resolved inputs
    let stored: RankResponse = cache.get(&docker_rank_key()).await.unwrap();
    assert_eq!(stored.total_candidates, 1);
    assert_eq!(stored.matches[0].id, "x");

    // Plant a distinguishable entry: the next response must come from the cache
    let mut planted = stored.clone();
    planted.total_candidates = 99;
    cache.set(&docker_rank_key(), &planted).await.unwrap();

    let second: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/compatibility/rank")
            .set_json(docker_rank_payload())
            .to_request(),
    )
    .await;
    assert_eq!(second["totalCandidates"], 99);
}

#[actix_web::test]
async fn test_rank_recovers_from_corrupt_cache_entry() {
    let state = app_state(true);
    let cache = state.cache.clone().unwrap();
    let app = service!(state);

    cache.set(&docker_rank_key(), &"garbage").await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/compatibility/rank")
            .set_json(docker_rank_payload())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "matches": [{ "id": "x", "score": 100, "matchedSkills": ["Docker"], "missingSkills": [] }],
            "totalCandidates": 1,
        })
    );

    // The recomputed result replaces the corrupt entry
    let repaired: RankResponse = cache.get(&docker_rank_key()).await.unwrap();
    assert_eq!(repaired.total_candidates, 1);
}

#[actix_web::test]
async fn test_rank_rejects_invalid_candidate_label() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/rank")
        .set_json(json!({
            "requiredSkills": ["Go"],
            "candidates": [{ "id": "a", "skills": ["Go", ""] }],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
}

#[actix_web::test]
async fn test_rank_requires_candidates() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/rank")
        .set_json(json!({ "requiredSkills": ["Go"], "candidates": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_stack_endpoint() {
    let app = service!(app_state(false));

    let req = test::TestRequest::post()
        .uri("/api/v1/stack")
        .set_json(json!({
            "repositories": [
                { "name": "api", "language": "Rust", "topics": ["docker"] },
                { "name": "cli", "language": "rust", "topics": [] },
                { "name": "site", "language": "TypeScript" },
            ],
            "minRepositories": 2,
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["skills"], json!(["Rust"]));
    assert_eq!(body["stack"], json!([{ "skill": "Rust", "repositories": 2 }]));
}
