use std::collections::BTreeSet;

use crate::core::dealbreakers::deal_breaker_penalty;
use crate::models::{CompatibilityBreakdown, CompatibilityWeights, Lifestyle, Profile};

/// Age gaps (inclusive upper bound) and the points out of 10 they earn
const AGE_TIERS: [(u8, f64); 3] = [(3, 10.0), (5, 7.0), (8, 4.0)];

/// Points a pair of scale values earns: 10 minus 2 per step apart
const SCALE_STEP_PENALTY: f64 = 2.0;
const SUB_FACTOR_MAX: f64 = 10.0;
const SLEEP_MISMATCH_POINTS: f64 = 3.0;

/// Score two profiles with the default weights
///
/// Returns 0 when either profile is missing. See [`CompatibilityEngine`].
pub fn compute_compatibility(a: Option<&Profile>, b: Option<&Profile>) -> f64 {
    CompatibilityEngine::default().score(a, b)
}

/// Weighted multi-factor roommate compatibility scoring
///
/// Scoring formula (default weights):
/// score = (
///     age_points         # up to 10, by age gap tier
///   + location_points    # 15 if one locality contains the other, else 5
///   + lifestyle_points   # up to 50, minus deal-breaker penalties, floored at 0
///   + budget_points      # up to 15, by budget overlap
///   + tag_points         # up to 10, Jaccard similarity of tags
/// )
///
/// A factor only contributes when both profiles carry data for it. Factors
/// that cannot be evaluated add nothing, so sparse profiles score lower than
/// complete ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityEngine {
    weights: CompatibilityWeights,
}

impl CompatibilityEngine {
    pub fn new(weights: CompatibilityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &CompatibilityWeights {
        &self.weights
    }

    /// Final 0-100 score rounded to two decimals
    pub fn score(&self, a: Option<&Profile>, b: Option<&Profile>) -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => self.breakdown(a, b).score,
            _ => 0.0,
        }
    }

    /// Score two profiles and keep the contribution of every factor
    pub fn breakdown(&self, a: &Profile, b: &Profile) -> CompatibilityBreakdown {
        let age = match (a.age, b.age) {
            (Some(x), Some(y)) => Some(calculate_age_score(x, y) * self.weights.age),
            _ => None,
        };

        let location = match (a.location(), b.location()) {
            (Some(x), Some(y)) => Some(calculate_location_score(x, y) * self.weights.location),
            _ => None,
        };

        let penalty = deal_breaker_penalty(a, b);
        let lifestyle = match (a.lifestyle.as_ref(), b.lifestyle.as_ref()) {
            (Some(x), Some(y)) => calculate_lifestyle_score(x, y)
                .map(|s| (s * self.weights.lifestyle - penalty).max(0.0)),
            _ => None,
        };

        let budget = match (a.budget(), b.budget()) {
            (Some(x), Some(y)) => Some(
                calculate_budget_score(x.min, x.max, y.min, y.max) * self.weights.budget,
            ),
            _ => None,
        };

        let tags = calculate_tag_score(&a.tags, &b.tags).map(|s| s * self.weights.tags);

        // Folding from +0.0 keeps an all-absent pair at positive zero
        let total = [age, location, lifestyle, budget, tags]
            .iter()
            .flatten()
            .fold(0.0, |acc, points| acc + points);

        CompatibilityBreakdown {
            age,
            location,
            lifestyle,
            deal_breaker_penalty: penalty,
            budget,
            tags,
            score: round_score(total.clamp(0.0, 100.0)),
        }
    }

    /// Tags both profiles share, normalised and sorted
    pub fn shared_tags(&self, a: &Profile, b: &Profile) -> Vec<String> {
        normalized_tags(&a.tags)
            .intersection(&normalized_tags(&b.tags))
            .cloned()
            .collect()
    }
}

/// Round to two decimal places
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Age score (0-1) from the gap tiers
#[inline]
fn calculate_age_score(age_a: u8, age_b: u8) -> f64 {
    let diff = age_a.abs_diff(age_b);
    AGE_TIERS
        .iter()
        .find(|(max_gap, _)| diff <= *max_gap)
        .map(|(_, points)| points / SUB_FACTOR_MAX)
        .unwrap_or(0.0)
}

/// Location score (0-1)
/// Containment either way counts as the same area, anything else still earns a third
#[inline]
fn calculate_location_score(loc_a: &str, loc_b: &str) -> f64 {
    let a = loc_a.to_lowercase();
    let b = loc_b.to_lowercase();

    if a.contains(&b) || b.contains(&a) {
        1.0
    } else {
        1.0 / 3.0
    }
}

/// Lifestyle score (0-1) before deal-breaker penalties
///
/// Averages the sub-factors both sides filled in; `None` if there were none.
fn calculate_lifestyle_score(a: &Lifestyle, b: &Lifestyle) -> Option<f64> {
    let mut points = Vec::with_capacity(3);

    if let (Some(x), Some(y)) = (a.cleanliness(), b.cleanliness()) {
        points.push(scale_points(x, y));
    }

    if let (Some(x), Some(y)) = (a.social_level(), b.social_level()) {
        points.push(scale_points(x, y));
    }

    if let (Some(x), Some(y)) = (a.sleep_schedule(), b.sleep_schedule()) {
        points.push(if x == y { SUB_FACTOR_MAX } else { SLEEP_MISMATCH_POINTS });
    }

    if points.is_empty() {
        return None;
    }

    let average = points.iter().sum::<f64>() / points.len() as f64;
    Some(average / SUB_FACTOR_MAX)
}

#[inline]
fn scale_points(x: u8, y: u8) -> f64 {
    (SUB_FACTOR_MAX - SCALE_STEP_PENALTY * x.abs_diff(y) as f64).max(0.0)
}

/// Budget score (0-1): overlap relative to the wider of the two ranges
#[inline]
fn calculate_budget_score(min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> f64 {
    let overlap = (max_a.min(max_b) - min_a.max(min_b)).max(0.0);
    let total_range = (max_a - min_a).max(max_b - min_b);

    if total_range <= 0.0 || overlap <= 0.0 {
        return 0.0;
    }

    (overlap / total_range).min(1.0)
}

/// Tag score (0-1) as Jaccard similarity; `None` unless both sides have tags
fn calculate_tag_score(tags_a: &[String], tags_b: &[String]) -> Option<f64> {
    let a = normalized_tags(tags_a);
    let b = normalized_tags(tags_b);

    if a.is_empty() || b.is_empty() {
        return None;
    }

    let shared = a.intersection(&b).count() as f64;
    let union = a.union(&b).count() as f64;

    Some(shared / union)
}

fn normalized_tags(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
