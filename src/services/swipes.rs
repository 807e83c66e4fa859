use crate::core::{detect_match, relation_state, Matcher, SwipeOutcome};
use crate::models::{SwipeAction, SwipeResponse};
use crate::services::postgres::PostgresError;
use crate::services::store::MatchStore;

/// Record a swipe and turn a mutual like into a scored match
///
/// The match is scored once, right after the insert that created it. When a
/// concurrent request wins the insert, this swipe reports `AlreadyMatched`
/// and leaves scoring to the winner.
pub async fn process_swipe<S>(
    store: &S,
    matcher: &Matcher,
    user_id: &str,
    target_id: &str,
    action: SwipeAction,
) -> Result<SwipeResponse, PostgresError>
where
    S: MatchStore + ?Sized,
{
    if user_id == target_id {
        return Err(PostgresError::InvalidInput(
            "users cannot swipe on themselves".to_string(),
        ));
    }

    store.record_swipe(user_id, target_id, action).await?;

    let existing = store.get_match_between(user_id, target_id).await?;
    let reverse = store.get_swipe(target_id, user_id).await?;

    let mut outcome = detect_match(action, reverse, existing.is_some());
    let mut record = existing;
    let mut compatibility_score = record.as_ref().and_then(|m| m.compatibility_score);

    if outcome.creates_match() {
        match store.create_match(user_id, target_id).await? {
            Some(created) => {
                let (profile_a, profile_b) = tokio::try_join!(
                    store.get_profile(&created.user1_id),
                    store.get_profile(&created.user2_id),
                )?;

                let score = matcher.score_match(profile_a.as_ref(), profile_b.as_ref());
                store.set_match_score(created.id, score).await?;

                compatibility_score = Some(score);
                record = Some(created);
            }
            None => {
                outcome = SwipeOutcome::AlreadyMatched;
                record = store.get_match_between(user_id, target_id).await?;
                compatibility_score = record.as_ref().and_then(|m| m.compatibility_score);
            }
        }
    }

    tracing::debug!(
        "Swipe {} -> {} ({}): {:?}",
        user_id,
        target_id,
        action.as_str(),
        outcome
    );

    Ok(SwipeResponse {
        outcome,
        state: relation_state(Some(action), reverse, record.is_some()),
        match_id: record.as_ref().map(|m| m.id),
        compatibility_score,
    })
}
