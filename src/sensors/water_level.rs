//! Capacitive reservoir water-level sensor.
//!
//! Only emits `TooLow`, `DangerLow` and `Ok` (plus the invalid sentinel).
//! The top bound sits one past the ADC ceiling so every in-domain raw value
//! classifies.

use crate::sensors::reading::SensorReading;
use crate::sensors::threshold::ThresholdLadder;
use crate::severity::SeverityLevel;

/// No water, or barely any, left in the reservoir.
pub const THRESH_DRY: u16 = 200;
/// The reservoir is running low.
pub const THRESH_DANGER_LOW: u16 = 450;
/// Enough water left.
pub const THRESH_OK: u16 = 1024;

pub const LADDER: ThresholdLadder<u16> = ThresholdLadder::new(&[
    (THRESH_DRY, SeverityLevel::TooLow),
    (THRESH_DANGER_LOW, SeverityLevel::DangerLow),
    (THRESH_OK, SeverityLevel::Ok),
]);

pub fn classify(reading: SensorReading) -> SeverityLevel {
    LADDER.classify(reading.raw())
}
