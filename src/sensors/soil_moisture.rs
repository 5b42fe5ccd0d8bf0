//! Capacitive soil-moisture probe.
//!
//! The probe's raw scale is *inverted*: a low raw value means wet soil.
//! Severity labels follow moisture, not the raw value, so the wettest band
//! (`raw <= 350`) is `TooHigh` and bone-dry soil (`651..=1023`) is
//! `TooLow`.  Uses the full five-level range.

use crate::sensors::reading::SensorReading;
use crate::sensors::threshold::ThresholdLadder;
use crate::severity::SeverityLevel;

/// Soaking wet soil, or stagnant water.
pub const THRESH_TOO_WET: u16 = 350;
/// Soil is well saturated with water.
pub const THRESH_DANGEROUSLY_WET: u16 = 450;
/// Ideal saturation.
pub const THRESH_OK: u16 = 550;
/// Damp soil, on the verge of drying out.
pub const THRESH_DANGEROUSLY_DRY: u16 = 650;
/// Bone dry soil.
pub const THRESH_TOO_DRY: u16 = 1023;

pub const LADDER: ThresholdLadder<u16> = ThresholdLadder::new(&[
    (THRESH_TOO_WET, SeverityLevel::TooHigh),
    (THRESH_DANGEROUSLY_WET, SeverityLevel::DangerHigh),
    (THRESH_OK, SeverityLevel::Ok),
    (THRESH_DANGEROUSLY_DRY, SeverityLevel::DangerLow),
    (THRESH_TOO_DRY, SeverityLevel::TooLow),
]);

pub fn classify(reading: SensorReading) -> SeverityLevel {
    LADDER.classify(reading.raw())
}
