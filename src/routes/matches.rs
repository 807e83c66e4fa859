use actix_web::{web, HttpResponse};
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{
    DiscoverRequest, DiscoverResponse, HealthResponse, MatchRecord, MatchesResponse, Profile,
    SwipeAction, SwipeHistoryQuery, SwipeHistoryResponse, SwipeRequest, UserQuery,
};
use crate::services::{process_swipe, CacheKey, CacheManager, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheManager>,
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure swipe and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/swipes", web::post().to(record_swipe))
        .route("/swipes", web::get().to(get_swipe_history))
        .route("/matches", web::get().to(get_matches))
        .route("/matches/discover", web::post().to(discover));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Record a swipe and create a match on mutual like
///
/// POST /api/v1/swipes
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "targetUserId": "string",
///   "action": "like|pass"
/// }
/// ```
async fn record_swipe(
    state: web::Data<AppState>,
    req: web::Json<SwipeRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let action: SwipeAction = req.action.parse().map_err(ApiError::Validation)?;
    let user_id = req.user_id.as_str();
    let target_id = req.target_user_id.as_str();

    if user_id == target_id {
        return Err(ApiError::Validation("Users cannot swipe on themselves".to_string()));
    }

    let response =
        process_swipe(state.postgres.as_ref(), &state.matcher, user_id, target_id, action).await?;

    if response.outcome.creates_match() {
        for user in [user_id, target_id] {
            if let Err(e) = state.cache.delete(&CacheKey::matches(user)).await {
                tracing::warn!("Failed to invalidate match cache for {}: {}", user, e);
            }
        }
    }

    tracing::info!(
        "Swipe {} -> {} ({}): {:?}",
        user_id,
        target_id,
        action.as_str(),
        response.outcome
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Fetch a profile through the cache
async fn load_profile(state: &AppState, user_id: &str) -> Result<Option<Profile>, ApiError> {
    let key = CacheKey::profile(user_id);

    match state.cache.get::<Profile>(&key).await {
        Ok(Some(profile)) => return Ok(Some(profile)),
        Ok(None) => {}
        Err(e) => tracing::warn!("Profile cache read failed for {}: {}", user_id, e),
    }

    let profile = state.postgres.get_profile(user_id).await?;

    if let Some(profile) = &profile {
        if let Err(e) = state.cache.set(&key, profile).await {
            tracing::warn!("Failed to cache profile {}: {}", user_id, e);
        }
    }

    Ok(profile)
}

/// List a user's matches
///
/// GET /api/v1/matches?userId={userId}
async fn get_matches(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let user_id = query.user_id.as_str();
    let key = CacheKey::matches(user_id);

    let cached = match state.cache.get::<Vec<MatchRecord>>(&key).await {
        Ok(cached) => cached,
        Err(e) => {
            tracing::warn!("Match cache read failed for {}: {}", user_id, e);
            None
        }
    };

    let matches = match cached {
        Some(matches) => matches,
        None => {
            let matches = state.postgres.get_matches(user_id).await?;
            if let Err(e) = state.cache.set(&key, &matches).await {
                tracing::warn!("Failed to cache matches for {}: {}", user_id, e);
            }
            matches
        }
    };

    Ok(HttpResponse::Ok().json(MatchesResponse {
        user_id: user_id.to_string(),
        count: matches.len(),
        matches,
    }))
}

/// Page through the swipes a user made
///
/// GET /api/v1/swipes?userId={userId}&limit={limit}&offset={offset}
async fn get_swipe_history(
    state: web::Data<AppState>,
    query: web::Query<SwipeHistoryQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let swipes = state
        .postgres
        .get_swipes_paginated(&query.user_id, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(SwipeHistoryResponse {
        user_id: query.user_id.clone(),
        count: swipes.len(),
        swipes,
    }))
}

/// Compatibility-ranked discovery feed
///
/// POST /api/v1/matches/discover
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn discover(
    state: web::Data<AppState>,
    req: web::Json<DiscoverRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user_id = req.user_id.as_str();
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    let profile = load_profile(&state, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Profile not found for user {}", user_id)))?;

    // Profiles already swiped on never come back
    let mut exclude: HashSet<String> = match state.postgres.get_swiped_ids(user_id).await {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            tracing::warn!("Failed to fetch swiped profiles for {}, proceeding without filtering: {}", user_id, e);
            HashSet::new()
        }
    };
    exclude.extend(req.exclude_user_ids.iter().cloned());

    let exclude_ids: Vec<String> = exclude.iter().cloned().collect();
    let pool_size = limit * state.matching.candidate_pool_multiplier.max(1);

    let candidates = state
        .postgres
        .list_candidates(user_id, &exclude_ids, pool_size)
        .await?;

    let result = state.matcher.rank_candidates(&profile, candidates, &exclude, limit);

    tracing::info!(
        "Returning {} candidates for user {} (from {} profiles)",
        result.candidates.len(),
        user_id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(DiscoverResponse {
        candidates: result.candidates,
        total_candidates: result.total_candidates,
    }))
}
