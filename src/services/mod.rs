// Service exports
pub mod cache;
pub mod postgres;
pub mod store;
pub mod swipes;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use postgres::{PostgresClient, PostgresError};
pub use store::MatchStore;
pub use swipes::process_swipe;
