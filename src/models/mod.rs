// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ordered_pair, BudgetRange, CompatibilityBreakdown, CompatibilityWeights, Lifestyle,
    MatchRecord, Profile, ScoredCandidate, Swipe, SwipeAction,
};
pub use requests::{
    CompatibilityRequest, DiscoverRequest, SwipeHistoryQuery, SwipeRequest, UserQuery,
};
pub use responses::{
    CompatibilityResponse, DiscoverResponse, ErrorResponse, HealthResponse, MatchesResponse,
    SwipeHistoryResponse, SwipeResponse,
};
