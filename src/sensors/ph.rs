//! BNC pH probe with its amplifier board.
//!
//! The board handles the logarithmic part of the measurement, so the raw
//! value only needs a linear mapping onto `0.0..=14.0` before it is
//! compared against the ladder.  Uses the full five-level range.
//!
//! The probe in the reference pot is known to be faulty (it sits at a
//! constant reading regardless of the solution), which is why the default
//! configuration pins pH to `Ok`; see [`crate::config::SensorSource`].

use crate::sensors::reading::SensorReading;
use crate::sensors::threshold::ThresholdLadder;
use crate::severity::SeverityLevel;

pub const PH_MIN: f32 = 0.0;
pub const PH_MAX: f32 = 14.0;

// Bands for commonly grown pot plants.
pub const PH_TOO_LOW: f32 = 5.8;
pub const PH_DANGER_LOW: f32 = 6.1;
pub const PH_OK: f32 = 7.0;
pub const PH_DANGER_HIGH: f32 = 7.5;
pub const PH_TOO_HIGH: f32 = 14.0;

pub const LADDER: ThresholdLadder<f32> = ThresholdLadder::new(&[
    (PH_TOO_LOW, SeverityLevel::TooLow),
    (PH_DANGER_LOW, SeverityLevel::DangerLow),
    (PH_OK, SeverityLevel::Ok),
    (PH_DANGER_HIGH, SeverityLevel::DangerHigh),
    (PH_TOO_HIGH, SeverityLevel::TooHigh),
]);

/// Map a raw reading onto the pH scale.
pub fn to_ph(reading: SensorReading) -> f32 {
    reading.map_float(PH_MIN, PH_MAX)
}

pub fn classify_ph(value: f32) -> SeverityLevel {
    LADDER.classify(value)
}

pub fn classify(reading: SensorReading) -> SeverityLevel {
    classify_ph(to_ph(reading))
}
