//! Suggestion types
//!
//! Values produced by the simulator. Nothing here outlives the call that
//! built it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tone::Tone;
use crate::locale::Locale;

/// Number of suggestions returned per request
pub const SUGGESTIONS_PER_REQUEST: usize = 3;

/// Free-text fields describing who the card is for
///
/// Blank fields are allowed; they render as a localized placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftContext {
    pub receiver: String,
    pub relationship: String,
    pub occasion: String,
}

impl GiftContext {
    pub fn new(
        receiver: impl Into<String>,
        relationship: impl Into<String>,
        occasion: impl Into<String>,
    ) -> Self {
        GiftContext {
            receiver: receiver.into(),
            relationship: relationship.into(),
            occasion: occasion.into(),
        }
    }
}

/// A single generated gift message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique across calls and within a call
    pub id: String,
    pub message: String,
    /// Rank-derived score in [0, 1]; higher ranks first
    pub confidence: f64,
}

/// Everything returned by one successful request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    /// Tone actually used, after fallback
    pub tone: Tone,
    pub locale: Locale,
    /// In rank order
    pub suggestions: Vec<Suggestion>,
    pub generated_at: DateTime<Utc>,
}

/// Confidence for the suggestion at `rank`: 0.95, 0.90, 0.85, ...
///
/// Computed in hundredths so every value is the nearest f64 to its decimal.
pub fn confidence_for_rank(rank: usize) -> f64 {
    let hundredths = 95usize.saturating_sub(rank.saturating_mul(5));
    hundredths as f64 / 100.0
}
