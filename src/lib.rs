//! giftai: a mock AI gift-message service
//!
//! Generates gift-card message suggestions from static templates after a
//! simulated network delay, with optional random failure injection. Meant as
//! a stand-in backend for front-end development.

pub mod ai;
pub mod config;
pub mod error;
pub mod locale;

pub use error::GiftError;
pub use locale::Locale;
