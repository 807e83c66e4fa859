use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Roommate profile as stored by the main application
///
/// Every field except the id is independently optional; the compatibility
/// engine treats a missing field as "no signal" for the matching factor.
/// A field holding a value of the wrong type deserializes as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub age: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub lifestyle: Option<Lifestyle>,
    #[serde(rename = "dealBreakers", default, deserialize_with = "lenient_strings")]
    pub deal_breakers: Vec<String>,
    #[serde(rename = "budgetRange", default, deserialize_with = "lenient")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
}

impl Profile {
    /// Location with surrounding whitespace removed, `None` when blank
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }

    /// Budget range, `None` when absent or inverted
    pub fn budget(&self) -> Option<&BudgetRange> {
        self.budget_range.as_ref().filter(|b| b.is_valid())
    }
}

/// Day-to-day habits used by the lifestyle factor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default, deserialize_with = "lenient")]
    pub cleanliness: Option<u8>,
    #[serde(rename = "socialLevel", default, deserialize_with = "lenient")]
    pub social_level: Option<u8>,
    #[serde(rename = "sleepSchedule", default, deserialize_with = "lenient")]
    pub sleep_schedule: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub smoking: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub pets: Option<bool>,
}

/// Lowest value of a 1..5 lifestyle scale
pub const SCALE_MIN: u8 = 1;
/// Highest value of a 1..5 lifestyle scale
pub const SCALE_MAX: u8 = 5;

impl Lifestyle {
    /// Cleanliness, `None` when outside the 1..5 scale
    pub fn cleanliness(&self) -> Option<u8> {
        self.cleanliness.filter(|v| on_scale(*v))
    }

    /// Social level, `None` when outside the 1..5 scale
    pub fn social_level(&self) -> Option<u8> {
        self.social_level.filter(|v| on_scale(*v))
    }

    pub fn sleep_schedule(&self) -> Option<&str> {
        self.sleep_schedule.as_deref()
    }

    pub fn smokes(&self) -> bool {
        self.smoking.unwrap_or(false)
    }

    pub fn has_pets(&self) -> bool {
        self.pets.unwrap_or(false)
    }
}

#[inline]
fn on_scale(value: u8) -> bool {
    (SCALE_MIN..=SCALE_MAX).contains(&value)
}

/// Optional field that reads a value of the wrong shape as `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// String list that skips non-string entries
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(strings)
}

/// Monthly rent a user is willing to pay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Swipe decision on another user's profile
///
/// Stored in the `swipe_action` enum column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "swipe_action", rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
        }
    }
}

impl std::str::FromStr for SwipeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(SwipeAction::Like),
            "pass" => Ok(SwipeAction::Pass),
            other => Err(format!("unknown swipe action '{}'", other)),
        }
    }
}

/// Recorded swipe of one user on another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swipe {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "targetUserId")]
    pub target_user_id: String,
    pub action: SwipeAction,
    #[serde(rename = "swipedAt")]
    pub swiped_at: chrono::DateTime<chrono::Utc>,
}

/// Persisted mutual match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: uuid::Uuid,
    #[serde(rename = "user1Id")]
    pub user1_id: String,
    #[serde(rename = "user2Id")]
    pub user2_id: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: Option<f64>,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

impl MatchRecord {
    /// The other participant of the match, if `user_id` is one of them
    pub fn partner_of(&self, user_id: &str) -> Option<&str> {
        if self.user1_id == user_id {
            Some(&self.user2_id)
        } else if self.user2_id == user_id {
            Some(&self.user1_id)
        } else {
            None
        }
    }
}

/// Order a user pair the way matches are keyed in storage
pub fn ordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Discovery feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
    #[serde(rename = "sharedTags")]
    pub shared_tags: Vec<String>,
    pub location: Option<String>,
    pub age: Option<u8>,
}

/// Maximum points each factor can contribute to the compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityWeights {
    pub age: f64,
    pub location: f64,
    pub lifestyle: f64,
    pub budget: f64,
    pub tags: f64,
}

impl CompatibilityWeights {
    pub fn total(&self) -> f64 {
        self.age + self.location + self.lifestyle + self.budget + self.tags
    }
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            age: 10.0,
            location: 15.0,
            lifestyle: 50.0,
            budget: 15.0,
            tags: 10.0,
        }
    }
}

/// Per-factor contributions behind a compatibility score
///
/// A factor is `None` when at least one side had no data for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub age: Option<f64>,
    pub location: Option<f64>,
    pub lifestyle: Option<f64>,
    #[serde(rename = "dealBreakerPenalty")]
    pub deal_breaker_penalty: f64,
    pub budget: Option<f64>,
    pub tags: Option<f64>,
    pub score: f64,
}
