//! Message tone
//!
//! The tone picks which template pool a request draws from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of gift message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Heartfelt, warm messages
    #[default]
    Emotional,
    /// Playful, teasing messages
    Funny,
    /// Polite, ceremonial messages
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Emotional, Tone::Funny, Tone::Formal];

    /// Parse tone from its exact lowercase id
    pub fn parse_tone(s: &str) -> Option<Self> {
        match s {
            "emotional" => Some(Tone::Emotional),
            "funny" => Some(Tone::Funny),
            "formal" => Some(Tone::Formal),
            _ => None,
        }
    }

    /// Parse tone from string, using the emotional pool for anything unknown
    ///
    /// An unrecognized tone is not an error: callers always get messages back.
    pub fn resolve(s: &str) -> Self {
        Self::parse_tone(s).unwrap_or_else(|| {
            log::debug!("Unknown tone {:?}, using emotional templates", s);
            Tone::Emotional
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Emotional => "emotional",
            Tone::Funny => "funny",
            Tone::Formal => "formal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
