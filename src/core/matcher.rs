use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::compatibility::CompatibilityEngine;
use crate::models::{CompatibilityWeights, Profile, ScoredCandidate, SwipeAction};

/// Relationship between two users as seen from one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationState {
    NoRelation,
    OneSidedLike,
    Matched,
}

/// What a single swipe did to the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeOutcome {
    /// The swipe was a pass; nothing else happens
    Passed,
    /// One-sided like, waiting for the other user
    Pending,
    /// The like completed a mutual pair; a match must be created
    Matched,
    /// The pair was matched before this swipe
    AlreadyMatched,
}

impl SwipeOutcome {
    pub fn creates_match(&self) -> bool {
        matches!(self, SwipeOutcome::Matched)
    }
}

/// Decide the outcome of `action` given the other user's prior swipe on us
#[inline]
pub fn detect_match(
    action: SwipeAction,
    reverse: Option<SwipeAction>,
    already_matched: bool,
) -> SwipeOutcome {
    match action {
        SwipeAction::Pass => SwipeOutcome::Passed,
        SwipeAction::Like if already_matched => SwipeOutcome::AlreadyMatched,
        SwipeAction::Like if reverse == Some(SwipeAction::Like) => SwipeOutcome::Matched,
        SwipeAction::Like => SwipeOutcome::Pending,
    }
}

/// Derive the pair state from stored records
///
/// `forward` is our swipe on them, `reverse` theirs on us.
#[inline]
pub fn relation_state(
    forward: Option<SwipeAction>,
    reverse: Option<SwipeAction>,
    matched: bool,
) -> RelationState {
    if matched {
        return RelationState::Matched;
    }

    if forward == Some(SwipeAction::Like) || reverse == Some(SwipeAction::Like) {
        RelationState::OneSidedLike
    } else {
        RelationState::NoRelation
    }
}

/// Result of ranking a discovery feed
#[derive(Debug)]
pub struct RankResult {
    pub candidates: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Matching orchestrator built around the compatibility engine
///
/// Scores new matches once and ranks candidate feeds by compatibility.
#[derive(Debug, Clone)]
pub struct Matcher {
    engine: CompatibilityEngine,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: CompatibilityWeights, min_score: f64) -> Self {
        Self {
            engine: CompatibilityEngine::new(weights),
            min_score,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(CompatibilityWeights::default(), 0.0)
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Score for a freshly created match
    ///
    /// A missing profile snapshot scores 0 so the match always gets a value.
    pub fn score_match(&self, a: Option<&Profile>, b: Option<&Profile>) -> f64 {
        let score = self.engine.score(a, b);
        tracing::debug!(
            "Scored match {} <-> {}: {}",
            a.map(|p| p.user_id.as_str()).unwrap_or("<missing>"),
            b.map(|p| p.user_id.as_str()).unwrap_or("<missing>"),
            score
        );
        score
    }

    /// Rank candidates for `profile` by compatibility
    ///
    /// # Arguments
    /// * `profile` - The requesting user's profile
    /// * `candidates` - Profiles fetched from storage
    /// * `exclude` - User ids already swiped on or excluded by the client
    /// * `limit` - Maximum number of candidates to return
    ///
    /// # Returns
    /// Candidates sorted by score (descending) then user id (ascending)
    pub fn rank_candidates(
        &self,
        profile: &Profile,
        candidates: Vec<Profile>,
        exclude: &HashSet<String>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut ranked: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|c| c.user_id != profile.user_id)
            .filter(|c| !exclude.contains(&c.user_id))
            .filter_map(|candidate| {
                let score = self.engine.breakdown(profile, &candidate).score;
                if score < self.min_score {
                    return None;
                }

                let shared_tags = self.engine.shared_tags(profile, &candidate);
                Some(ScoredCandidate {
                    user_id: candidate.user_id,
                    compatibility_score: score,
                    shared_tags,
                    location: candidate.location,
                    age: candidate.age,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        ranked.truncate(limit);

        RankResult {
            candidates: ranked,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, age: u8, tags: &[&str]) -> Profile {
        Profile {
            user_id: id.to_string(),
            age: Some(age),
            location: Some("Boston".to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_match_truth_table() {
        use SwipeAction::{Like, Pass};

        assert_eq!(detect_match(Pass, Some(Like), false), SwipeOutcome::Passed);
        assert_eq!(detect_match(Like, None, false), SwipeOutcome::Pending);
        assert_eq!(detect_match(Like, Some(Pass), false), SwipeOutcome::Pending);
        assert_eq!(detect_match(Like, Some(Like), false), SwipeOutcome::Matched);
        assert_eq!(detect_match(Like, Some(Like), true), SwipeOutcome::AlreadyMatched);
    }

    #[test]
    fn test_relation_state() {
        use SwipeAction::{Like, Pass};

        assert_eq!(relation_state(None, None, false), RelationState::NoRelation);
        assert_eq!(relation_state(Some(Pass), None, false), RelationState::NoRelation);
        assert_eq!(relation_state(Some(Like), None, false), RelationState::OneSidedLike);
        assert_eq!(relation_state(None, Some(Like), false), RelationState::OneSidedLike);
        assert_eq!(relation_state(Some(Like), Some(Like), true), RelationState::Matched);
    }

    #[test]
    fn test_rank_orders_by_score() {
        let matcher = Matcher::with_default_weights();
        let me = candidate("me", 25, &["yoga", "reading"]);

        let candidates = vec![
            candidate("far_age", 40, &["yoga"]),
            candidate("close", 26, &["yoga", "reading"]),
            candidate("medium", 30, &["reading"]),
        ];

        let result = matcher.rank_candidates(&me, candidates, &HashSet::new(), 10);

        let ids: Vec<&str> = result.candidates.iter().map(|c| c.user_id.as_str()).collect();
        assert_eq!(ids, vec!["close", "medium", "far_age"]);
        assert_eq!(result.candidates[0].shared_tags, vec!["reading", "yoga"]);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_rank_excludes_self_and_seen() {
        let matcher = Matcher::with_default_weights();
        let me = candidate("me", 25, &[]);
        let exclude: HashSet<String> = ["seen".to_string()].into_iter().collect();

        let candidates = vec![
            candidate("me", 25, &[]),
            candidate("seen", 25, &[]),
            candidate("fresh", 25, &[]),
        ];

        let result = matcher.rank_candidates(&me, candidates, &exclude, 10);

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].user_id, "fresh");
    }

    #[test]
    fn test_rank_ties_break_by_user_id() {
        let matcher = Matcher::with_default_weights();
        let me = candidate("me", 25, &[]);
        let candidates = vec![candidate("b", 25, &[]), candidate("a", 25, &[])];

        let result = matcher.rank_candidates(&me, candidates, &HashSet::new(), 10);

        assert_eq!(result.candidates[0].user_id, "a");
        assert_eq!(result.candidates[1].user_id, "b");
    }

    #[test]
    fn test_rank_respects_limit_and_min_score() {
        let matcher = Matcher::new(CompatibilityWeights::default(), 20.0);
        let me = candidate("me", 25, &[]);

        let mut candidates: Vec<Profile> = (0..10)
            .map(|i| candidate(&format!("c{}", i), 25, &[]))
            .collect();
        // Age gap 20 and different city: location 5 only
        candidates.push(Profile {
            user_id: "low".to_string(),
            age: Some(45),
            location: Some("Denver".to_string()),
            ..Default::default()
        });

        let result = matcher.rank_candidates(&me, candidates, &HashSet::new(), 5);

        assert_eq!(result.candidates.len(), 5);
        assert!(result.candidates.iter().all(|c| c.user_id != "low"));
    }

    #[test]
    fn test_score_match_missing_profile() {
        let matcher = Matcher::default();
        let profile = candidate("a", 25, &["yoga"]);
        assert_eq!(matcher.score_match(Some(&profile), None), 0.0);
        assert!(matcher.score_match(Some(&profile), Some(&profile)) > 0.0);
    }
}
