//! Raw analog sample and its normalised views.
//!
//! A reading is computed fresh on every read; there is no smoothing or
//! caching.  The reference ADC domain is 10-bit (`0..=1023`), but a
//! reading may carry a value outside it so that classifiers can flag it as
//! invalid instead of the value being silently clamped.

use serde::{Deserialize, Serialize};

/// Upper bound of the reference ADC domain.
pub const RAW_MAX: u16 = 1023;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    raw: u16,
}

impl SensorReading {
    pub const fn new(raw: u16) -> Self {
        Self { raw }
    }

    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// True if the raw value lies inside `0..=RAW_MAX`.
    pub const fn in_domain(self) -> bool {
        self.raw <= RAW_MAX
    }

    /// Linear integer mapping of `0..=RAW_MAX` onto `min..=max`.
    ///
    /// Integer division truncates toward zero, matching the classic
    /// microcontroller `map()` helper.
    pub fn map_int(self, min: i32, max: i32) -> i32 {
        let span = i64::from(max) - i64::from(min);
        let scaled = i64::from(self.raw) * span / i64::from(RAW_MAX);
        (scaled + i64::from(min)) as i32
    }

    /// Linear float mapping of `0..=RAW_MAX` onto `min..=max`.
    pub fn map_float(self, min: f32, max: f32) -> f32 {
        (f32::from(self.raw) / f32::from(RAW_MAX)) * (max - min) + min
    }

    /// Reading expressed as a 0–100 percentage of the ADC domain.
    pub fn percent(self) -> u32 {
        u32::from(self.raw) * 100 / u32::from(RAW_MAX)
    }
}

impl From<u16> for SensorReading {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}
