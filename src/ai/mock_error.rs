//! Simulated failures
//!
//! A fixed catalog of three localized error messages, plus the error type
//! returned when a request is turned into a simulated failure.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::locale::Locale;

/// Kind of simulated failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MockErrorKind {
    Timeout,
    ServerError,
    RateLimit,
}

impl MockErrorKind {
    pub const ALL: [MockErrorKind; 3] = [
        MockErrorKind::Timeout,
        MockErrorKind::ServerError,
        MockErrorKind::RateLimit,
    ];

    /// Pick a kind uniformly
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// User-facing message for this kind
    pub fn message(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, MockErrorKind::Timeout) => "⏰ タイムアウト: サーバーの応答が遅すぎます",
            (Locale::Ja, MockErrorKind::ServerError) => {
                "🔧 サーバーエラー: 後でもう一度お試しください"
            }
            (Locale::Ja, MockErrorKind::RateLimit) => "⚠️ リクエスト制限: しばらく待ってください",
            (Locale::En, MockErrorKind::Timeout) => {
                "⏰ Timeout: the server took too long to respond"
            }
            (Locale::En, MockErrorKind::ServerError) => "🔧 Server error: please try again later",
            (Locale::En, MockErrorKind::RateLimit) => "⚠️ Rate limited: please wait a moment",
            (Locale::Vi, MockErrorKind::Timeout) => {
                "⏰ Hết thời gian chờ: máy chủ phản hồi quá chậm"
            }
            (Locale::Vi, MockErrorKind::ServerError) => "🔧 Lỗi máy chủ: vui lòng thử lại sau",
            (Locale::Vi, MockErrorKind::RateLimit) => {
                "⚠️ Giới hạn yêu cầu: vui lòng chờ một lát"
            }
        }
    }
}

/// The full error catalog for a locale
pub fn error_catalog(locale: Locale) -> [&'static str; 3] {
    MockErrorKind::ALL.map(|kind| kind.message(locale))
}

/// A request that was deliberately failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SimulatedError {
    pub kind: MockErrorKind,
    pub message: &'static str,
}

impl SimulatedError {
    pub fn new(kind: MockErrorKind, locale: Locale) -> Self {
        SimulatedError {
            kind,
            message: kind.message(locale),
        }
    }
}

#[cfg(test)]
#[path = "mock_error_tests.rs"]
mod mock_error_tests;
