//! Water-detection probe at the bottom of the pot.
//!
//! Binary in practice: `Ok` when dry, `TooHigh` once standing water
//! touches the probe.

use crate::sensors::reading::SensorReading;
use crate::sensors::threshold::ThresholdLadder;
use crate::severity::SeverityLevel;

/// At or below this the probe is dry.
pub const THRESH_OFF: u16 = 50;
/// Water present.
pub const THRESH_ON: u16 = 1024;

pub const LADDER: ThresholdLadder<u16> = ThresholdLadder::new(&[
    (THRESH_OFF, SeverityLevel::Ok),
    (THRESH_ON, SeverityLevel::TooHigh),
]);

pub fn classify(reading: SensorReading) -> SeverityLevel {
    LADDER.classify(reading.raw())
}
