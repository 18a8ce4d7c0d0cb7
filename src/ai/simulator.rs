//! Mock suggestion service
//!
//! Fabricates AI-style gift-message suggestions after a randomized delay, so
//! front ends can be exercised without a real backend. Failure injection is
//! available two ways: as independent calls ([`SuggestionSimulator::should_simulate_error`]
//! and [`SuggestionSimulator::mock_error`]) that the caller sequences itself, or
//! folded into a single tagged result by [`SuggestionSimulator::request_suggestions`].
//!
//! Calls share no state. Each draws its own randomness, and the thread-local
//! RNG is released before the delay so the returned futures are `Send`.
//! There is no cancellation; dropping the future discards the result.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use super::mock_error::{MockErrorKind, SimulatedError};
use super::suggestion::{
    GiftContext, SUGGESTIONS_PER_REQUEST, Suggestion, SuggestionBatch, confidence_for_rank,
};
use super::template::{Template, templates};
use super::tone::Tone;
use crate::config::{Config, SimulatorConfig};
use crate::error::GiftError;
use crate::locale::Locale;

/// Mock AI service with configurable latency and failure rate
#[derive(Debug, Clone)]
pub struct SuggestionSimulator {
    config: SimulatorConfig,
    locale: Locale,
}

impl Default for SuggestionSimulator {
    fn default() -> Self {
        SuggestionSimulator {
            config: SimulatorConfig::default(),
            locale: Locale::default(),
        }
    }
}

impl SuggestionSimulator {
    /// Create a simulator, rejecting an empty delay range or an invalid error rate
    pub fn new(config: SimulatorConfig, locale: Locale) -> Result<Self, GiftError> {
        config.validate()?;
        Ok(SuggestionSimulator { config, locale })
    }

    /// Create a simulator from the loaded config, resolving an unset locale
    /// from the environment
    pub fn from_config(config: &Config) -> Result<Self, GiftError> {
        Self::new(config.simulator, config.effective_locale())
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Generate suggestions for `tone` after a randomized delay
    ///
    /// Always resolves, and never fails.
    pub async fn generate_suggestions(&self, tone: Tone, context: &GiftContext) -> SuggestionBatch {
        let (delay, suggestions) = {
            let mut rng = rand::rng();
            let delay = draw_delay(&mut rng, &self.config);
            let suggestions = build_suggestions(&mut rng, tone, self.locale, context);
            (delay, suggestions)
        };

        log::debug!(
            "Generating {} {} suggestions in {}ms",
            suggestions.len(),
            tone,
            delay.as_millis()
        );
        tokio::time::sleep(delay).await;

        SuggestionBatch {
            tone,
            locale: self.locale,
            suggestions,
            generated_at: Utc::now(),
        }
    }

    /// Like [`generate_suggestions`](Self::generate_suggestions), but accepts
    /// a raw tone string and uses the emotional pool if it isn't recognized
    pub async fn generate_for(&self, tone: &str, context: &GiftContext) -> SuggestionBatch {
        self.generate_suggestions(Tone::resolve(tone), context).await
    }

    /// Independent Bernoulli draw at the configured error rate
    pub fn should_simulate_error(&self) -> bool {
        roll_error(&mut rand::rng(), self.config.error_rate)
    }

    /// A random message from the error catalog
    pub fn mock_error(&self) -> &'static str {
        MockErrorKind::pick(&mut rand::rng()).message(self.locale)
    }

    /// Generate suggestions, or fail at the configured error rate
    ///
    /// A simulated failure still waits out a randomized delay, the way a real
    /// timeout or server error would.
    pub async fn request_suggestions(
        &self,
        tone: Tone,
        context: &GiftContext,
    ) -> Result<SuggestionBatch, SimulatedError> {
        if !self.should_simulate_error() {
            return Ok(self.generate_suggestions(tone, context).await);
        }

        let (delay, kind) = {
            let mut rng = rand::rng();
            (draw_delay(&mut rng, &self.config), MockErrorKind::pick(&mut rng))
        };

        log::debug!("Simulating {:?} after {}ms", kind, delay.as_millis());
        tokio::time::sleep(delay).await;

        Err(SimulatedError::new(kind, self.locale))
    }
}

// =========================================================================
// Random draws
// =========================================================================

/// Latency drawn uniformly from `[min_delay_ms, max_delay_ms)`
///
/// The config must have passed validation; an empty range panics.
pub fn draw_delay<R: Rng + ?Sized>(rng: &mut R, config: &SimulatorConfig) -> Duration {
    Duration::from_millis(rng.random_range(config.min_delay_ms..config.max_delay_ms))
}

/// Bernoulli draw with success probability `rate`
///
/// Rates outside [0, 1] saturate; NaN never fires.
pub fn roll_error<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> bool {
    rng.random::<f64>() < rate
}

/// Shuffle the tone's pool uniformly and render the first few templates
pub fn build_suggestions<R: Rng + ?Sized>(
    rng: &mut R,
    tone: Tone,
    locale: Locale,
    context: &GiftContext,
) -> Vec<Suggestion> {
    let mut pool: Vec<&Template> = templates(tone, locale).iter().collect();
    pool.shuffle(rng);

    let batch_id = Uuid::new_v4().simple();

    pool.into_iter()
        .take(SUGGESTIONS_PER_REQUEST)
        .enumerate()
        .map(|(rank, template)| Suggestion {
            id: format!("mock-suggestion-{}-{}", batch_id, rank),
            message: template.render(context, locale),
            confidence: confidence_for_rank(rank),
        })
        .collect()
}

// =========================================================================
// Default-configured entry points
// =========================================================================

/// Generate suggestions with the default simulator (Japanese, 1-3s, 5%)
pub async fn generate_suggestions(
    tone: &str,
    receiver: &str,
    relationship: &str,
    occasion: &str,
) -> Vec<Suggestion> {
    let context = GiftContext::new(receiver, relationship, occasion);
    SuggestionSimulator::default()
        .generate_for(tone, &context)
        .await
        .suggestions
}

/// 5% chance of `true`, independent across calls
pub fn should_simulate_error() -> bool {
    SuggestionSimulator::default().should_simulate_error()
}

/// A random Japanese error message from the catalog
pub fn mock_error() -> &'static str {
    SuggestionSimulator::default().mock_error()
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
