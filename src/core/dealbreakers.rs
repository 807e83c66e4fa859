use crate::models::{Lifestyle, Profile};

/// Points removed when a smoking deal-breaker meets a smoker
pub const SMOKING_PENALTY: f64 = 20.0;
/// Points removed when a pets deal-breaker meets a pet owner
pub const PETS_PENALTY: f64 = 15.0;
/// Points removed when a parties deal-breaker meets a highly social roommate
pub const PARTIES_PENALTY: f64 = 10.0;
/// Social level above which a roommate counts as a party person
pub const PARTIES_SOCIAL_THRESHOLD: u8 = 3;

/// Deal-breakers the engine knows how to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DealBreaker {
    Smoking,
    Pets,
    Parties,
}

impl DealBreaker {
    /// Parse a declared deal-breaker; unknown labels carry no penalty
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "smoking" => Some(DealBreaker::Smoking),
            "pets" => Some(DealBreaker::Pets),
            "parties" => Some(DealBreaker::Parties),
            _ => None,
        }
    }

    /// Penalty this deal-breaker incurs against the other side's lifestyle
    pub fn penalty_against(&self, other: &Lifestyle) -> f64 {
        match self {
            DealBreaker::Smoking if other.smokes() => SMOKING_PENALTY,
            DealBreaker::Pets if other.has_pets() => PETS_PENALTY,
            DealBreaker::Parties
                if other
                    .social_level()
                    .is_some_and(|level| level > PARTIES_SOCIAL_THRESHOLD) =>
            {
                PARTIES_PENALTY
            }
            _ => 0.0,
        }
    }
}

/// Penalty from `owner`'s deal-breakers checked against `other`'s lifestyle
///
/// Duplicate declarations of the same deal-breaker count once.
pub fn one_way_penalty(owner: &Profile, other: &Profile) -> f64 {
    let Some(lifestyle) = other.lifestyle.as_ref() else {
        return 0.0;
    };

    let mut declared: Vec<DealBreaker> = owner
        .deal_breakers
        .iter()
        .filter_map(|label| DealBreaker::parse(label))
        .collect();
    declared.sort();
    declared.dedup();

    declared
        .iter()
        .fold(0.0, |acc, d| acc + d.penalty_against(lifestyle))
}

/// Combined penalty for both directions of a pair
#[inline]
pub fn deal_breaker_penalty(a: &Profile, b: &Profile) -> f64 {
    one_way_penalty(a, b) + one_way_penalty(b, a)
}
