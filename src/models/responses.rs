use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::matcher::{RelationState, SwipeOutcome};
use crate::models::domain::{CompatibilityBreakdown, MatchRecord, ScoredCandidate, Swipe};

/// Response for the compatibility endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub score: f64,
    pub breakdown: CompatibilityBreakdown,
}

/// Response for the swipe endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub outcome: SwipeOutcome,
    pub state: RelationState,
    #[serde(rename = "matchId")]
    pub match_id: Option<Uuid>,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: Option<f64>,
}

/// Response for the match list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub matches: Vec<MatchRecord>,
    pub count: usize,
}

/// Response for the swipe history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeHistoryResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub swipes: Vec<Swipe>,
    pub count: usize,
}

/// Response for the discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub candidates: Vec<ScoredCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
