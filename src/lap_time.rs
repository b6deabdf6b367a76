//! `M:SS` lap-time codec.
//!
//! A [`LapTime`] is a whole number of seconds. It renders as unpadded minutes
//! and zero-padded two-digit seconds, so `83` seconds is `1:23` and `3600` is
//! `60:00`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LapTime(u32);

impl LapTime {
    pub fn from_seconds(seconds: u32) -> Self {
        LapTime(seconds)
    }

    pub fn seconds(self) -> u32 {
        self.0
    }

    /// Decodes `minutes:seconds` arithmetically; the public inverse of [`Display`](fmt::Display).
    ///
    /// Both parts must be non-negative integers and there must be exactly one
    /// separator. Minutes are unbounded, so every encoded value decodes back.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeFormat`] with the original text.
    pub fn decode(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTimeFormat(text.to_string());

        let mut parts = text.split(':');
        let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.parse().map_err(|_| invalid())?;

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(LapTime)
            .ok_or_else(invalid)
    }

    /// Parses a strict `M:SS` clock reading.
    ///
    /// Minutes are one or two digits in `0..=59`, seconds exactly two digits in
    /// `00..=59`. Anything else (signs, whitespace, `1:5`, `61:00`, `1:60`) is
    /// rejected.
    pub fn parse_clock(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTimeFormat(text.to_string());

        let (minutes, seconds) = text.split_once(':').ok_or_else(invalid)?;

        if !(1..=2).contains(&minutes.len()) || seconds.len() != 2 {
            return Err(invalid());
        }
        if !minutes.bytes().chain(seconds.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
        if minutes > 59 || seconds > 59 {
            return Err(invalid());
        }

        Ok(LapTime(minutes * 60 + seconds))
    }
}

impl fmt::Display for LapTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Lenient parse via [`LapTime::decode`]; validation uses [`LapTime::parse_clock`].
impl FromStr for LapTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LapTime::decode(s)
    }
}

impl Serialize for LapTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
