use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{MatchRecord, Profile, SwipeAction};
use crate::services::postgres::{PostgresClient, PostgresError};

/// Storage the swipe workflow runs against
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, PostgresError>;

    /// Upsert a swipe; the latest action on a target wins
    async fn record_swipe(
        &self,
        user_id: &str,
        target_user_id: &str,
        action: SwipeAction,
    ) -> Result<(), PostgresError>;

    async fn get_swipe(
        &self,
        user_id: &str,
        target_user_id: &str,
    ) -> Result<Option<SwipeAction>, PostgresError>;

    async fn get_match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, PostgresError>;

    /// Insert the match for an unordered pair, `None` if it already exists
    async fn create_match(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, PostgresError>;

    async fn set_match_score(&self, match_id: Uuid, score: f64) -> Result<(), PostgresError>;
}

#[async_trait]
impl MatchStore for PostgresClient {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, PostgresError> {
        PostgresClient::get_profile(self, user_id).await
    }

    async fn record_swipe(
        &self,
        user_id: &str,
        target_user_id: &str,
        action: SwipeAction,
    ) -> Result<(), PostgresError> {
        PostgresClient::record_swipe(self, user_id, target_user_id, action).await
    }

    async fn get_swipe(
        &self,
        user_id: &str,
        target_user_id: &str,
    ) -> Result<Option<SwipeAction>, PostgresError> {
        PostgresClient::get_swipe(self, user_id, target_user_id).await
    }

    async fn get_match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, PostgresError> {
        PostgresClient::get_match_between(self, user_a, user_b).await
    }

    async fn create_match(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, PostgresError> {
        PostgresClient::create_match(self, user_a, user_b).await
    }

    async fn set_match_score(&self, match_id: Uuid, score: f64) -> Result<(), PostgresError> {
        PostgresClient::set_match_score(self, match_id, score).await
    }
}
