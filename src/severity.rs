//! Discrete severity levels produced by every sensor classifier.
//!
//! The five ordinal levels describe how far a reading sits from the ideal
//! band, from `TooLow` up to `TooHigh`.  [`SeverityLevel::Invalid`] is an
//! out-of-band sentinel: it equals itself but is *unordered* against the
//! ordinal levels, so any `<`/`>=` comparison involving it is `false`.
//! Range checks must therefore go through [`SeverityLevel::within`], and
//! the sentinel must be tested for by identity.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    TooLow,
    DangerLow,
    Ok,
    DangerHigh,
    TooHigh,
    /// Reading fell outside every threshold of its ladder.
    Invalid,
}

impl SeverityLevel {
    /// The five ordinal levels in ascending order.
    pub const ORDINAL: [SeverityLevel; 5] = [
        SeverityLevel::TooLow,
        SeverityLevel::DangerLow,
        SeverityLevel::Ok,
        SeverityLevel::DangerHigh,
        SeverityLevel::TooHigh,
    ];

    /// Position on the ordinal scale, `None` for the invalid sentinel.
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::TooLow => Some(0),
            Self::DangerLow => Some(1),
            Self::Ok => Some(2),
            Self::DangerHigh => Some(3),
            Self::TooHigh => Some(4),
            Self::Invalid => None,
        }
    }

    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Inclusive ordinal range check.  Always `false` when any of the three
    /// levels is [`SeverityLevel::Invalid`].
    pub fn within(self, low: SeverityLevel, high: SeverityLevel) -> bool {
        match (self.rank(), low.rank(), high.rank()) {
            (Some(v), Some(lo), Some(hi)) => lo <= v && v <= hi,
            _ => false,
        }
    }

    /// Upper-case label used in status dumps.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooLow => "TOO_LOW",
            Self::DangerLow => "DANGER_LOW",
            Self::Ok => "OK",
            Self::DangerHigh => "DANGER_HIGH",
            Self::TooHigh => "TOO_HIGH",
            Self::Invalid => "INVALID_STATE",
        }
    }
}

impl PartialOrd for SeverityLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
