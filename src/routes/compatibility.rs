use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{calculate_compatibility, derive_stack, Matcher};
use crate::error::ApiError;
use crate::models::{
    CompatibilityRequest, HealthResponse, RankRequest, RankResponse, StackEntry, StackRequest,
    StackResponse,
};
use crate::services::{CacheError, CacheKey, ScoreCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
    pub cache: Option<Arc<ScoreCache>>,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(score_compatibility))
        .route("/compatibility/rank", web::post().to(rank_candidates))
        .route("/stack", web::post().to(build_stack));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let cached_entries = state
        .cache
        .as_ref()
        .map(|c| c.stats().entries)
        .unwrap_or(0);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cached_entries,
    })
}

/// Score one candidate stack against one required stack
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "candidateSkills": ["string"],
///   "requiredSkills": ["string"]
/// }
/// ```
async fn score_compatibility(req: web::Json<CompatibilityRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let result = calculate_compatibility(&req.candidate_skills, &req.required_skills);

    tracing::debug!(
        "Compatibility {}% ({} of {} required skills)",
        result.score,
        result.matched_skills.len(),
        req.required_skills.len()
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Rank candidates against a required stack
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "requiredSkills": ["string"],
///   "candidates": [{ "id": "string", "skills": ["string"] }],
///   "limit": 20,
///   "minScore": 0
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let req = req.into_inner();

    let limit = state.matching.resolve_limit(req.limit);
    let matcher = match req.min_score {
        Some(min_score) => state.matcher.with_min_score(min_score),
        None => state.matcher,
    };

    let cache_key = state.cache.as_ref().and_then(|_| {
        CacheKey::rank(&req.required_skills, &req.candidates, limit, matcher.min_score())
            .map_err(|e| tracing::warn!("Failed to build rank cache key: {}", e))
            .ok()
    });

    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        match cache.get::<RankResponse>(key).await {
            Ok(cached) => {
                tracing::debug!("Serving rank result from cache: {}", key);
                return Ok(HttpResponse::Ok().json(cached));
            }
            Err(CacheError::CacheMiss(_)) => {}
            Err(e) => tracing::warn!("Failed to read cached rank result: {}", e),
        }
    }

    let result = matcher.rank(&req.required_skills, req.candidates, limit);

    let response = RankResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        if let Err(e) = cache.set(key, &response).await {
            tracing::warn!("Failed to cache rank result: {}", e);
        }
    }

    tracing::info!(
        "Returning {} ranked candidates (from {}, {} required skills)",
        response.matches.len(),
        response.total_candidates,
        req.required_skills.len()
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Derive a skill stack from repository languages and topics
///
/// POST /api/v1/stack
///
/// Request body:
/// ```json
/// {
///   "repositories": [{ "name": "string", "language": "string", "topics": ["string"] }],
///   "minRepositories": 1
/// }
/// ```
async fn build_stack(req: web::Json<StackRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let min_repositories = req.min_repositories.unwrap_or(1) as usize;
    let stack = derive_stack(&req.repositories, min_repositories);
    let skills = StackEntry::labels(&stack);

    tracing::debug!(
        "Derived {} skills from {} repositories",
        skills.len(),
        req.repositories.len()
    );

    Ok(HttpResponse::Ok().json(StackResponse { stack, skills }))
}
