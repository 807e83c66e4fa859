// Core algorithm exports
pub mod compatibility;
pub mod dealbreakers;
pub mod matcher;

pub use compatibility::{compute_compatibility, round_score, CompatibilityEngine};
pub use dealbreakers::{deal_breaker_penalty, DealBreaker};
pub use matcher::{detect_match, relation_state, Matcher, RankResult, RelationState, SwipeOutcome};
