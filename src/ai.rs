//! Mock AI suggestion service
//!
//! Tone-driven gift-message templates, a simulator that serves them with
//! artificial latency, and the simulated-failure catalog.

pub mod fallback;
pub mod mock_error;
pub mod simulator;
pub mod suggestion;
pub mod template;
pub mod tone;

pub use fallback::fallback_messages;
pub use mock_error::{MockErrorKind, SimulatedError, error_catalog};
pub use simulator::{SuggestionSimulator, generate_suggestions, mock_error, should_simulate_error};
pub use suggestion::{GiftContext, Suggestion, SuggestionBatch};
pub use tone::Tone;
