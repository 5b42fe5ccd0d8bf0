//! Sensor subsystem: per-probe classifiers and the slots the decider owns.
//!
//! Every probe is an [`AnalogSensor`]: a [`SensorKind`] bound to an ADC
//! channel.  The kind is a closed enum, so dispatch to the right threshold
//! ladder is an exhaustive `match`.  A [`SensorSlot`] either samples a live
//! sensor or reports a pinned severity, which is how a faulty probe is
//! taken out of circuit without touching the decision rules.

pub mod ph;
pub mod reading;
pub mod soil_moisture;
pub mod threshold;
pub mod water_detection;
pub mod water_level;

use core::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::app::ports::AnalogInput;
use crate::config::SensorSource;
use crate::severity::SeverityLevel;
use reading::SensorReading;

/// The closed set of probes the controller knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    SoilMoisture,
    Ph,
    WaterLevel,
    WaterDetection,
}

impl SensorKind {
    pub const ALL: [SensorKind; 4] = [
        SensorKind::SoilMoisture,
        SensorKind::Ph,
        SensorKind::WaterLevel,
        SensorKind::WaterDetection,
    ];

    /// Classify a raw reading with this kind's threshold ladder.
    pub fn classify(self, reading: SensorReading) -> SeverityLevel {
        match self {
            Self::SoilMoisture => soil_moisture::classify(reading),
            Self::Ph => ph::classify(reading),
            Self::WaterLevel => water_level::classify(reading),
            Self::WaterDetection => water_detection::classify(reading),
        }
    }

    /// Ordinal levels this kind may emit (besides `Invalid`).
    pub fn levels(self) -> &'static [SeverityLevel] {
        use SeverityLevel::{DangerLow, Ok, TooHigh, TooLow};
        match self {
            Self::SoilMoisture | Self::Ph => &SeverityLevel::ORDINAL,
            Self::WaterLevel => &[TooLow, DangerLow, Ok],
            Self::WaterDetection => &[Ok, TooHigh],
        }
    }

    /// Human-readable name used in status dumps.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SoilMoisture => "Soil Moisture",
            Self::Ph => "PH",
            Self::WaterLevel => "Water level",
            Self::WaterDetection => "Water detection",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A probe bound to a fixed ADC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogSensor {
    kind: SensorKind,
    channel: u32,
}

impl AnalogSensor {
    pub const fn new(kind: SensorKind, channel: u32) -> Self {
        Self { kind, channel }
    }

    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    pub const fn channel(&self) -> u32 {
        self.channel
    }

    pub fn read(&self, adc: &mut impl AnalogInput) -> SensorReading {
        SensorReading::new(adc.read_raw(self.channel))
    }

    /// Read once and classify that same reading.
    pub fn sample(&self, adc: &mut impl AnalogInput) -> SensorSample {
        let reading = self.read(adc);
        if !reading.in_domain() {
            warn!("{}: raw {} outside the ADC range", self.kind, reading.raw());
        }
        SensorSample {
            kind: self.kind,
            raw: Some(reading.raw()),
            level: self.kind.classify(reading),
        }
    }
}

/// One classified observation of a sensor.
///
/// `raw` is `None` when the severity came from a pinned slot rather than
/// an ADC read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSample {
    pub kind: SensorKind,
    pub raw: Option<u16>,
    pub level: SeverityLevel,
}

/// Where the decider gets a sensor's severity from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorSlot {
    Live(AnalogSensor),
    Pinned { kind: SensorKind, level: SeverityLevel },
}

impl SensorSlot {
    pub fn from_source(kind: SensorKind, channel: u32, source: SensorSource) -> Self {
        match source {
            SensorSource::Live => Self::Live(AnalogSensor::new(kind, channel)),
            SensorSource::Pinned(level) => Self::Pinned { kind, level },
        }
    }

    pub fn kind(&self) -> SensorKind {
        match self {
            Self::Live(sensor) => sensor.kind(),
            Self::Pinned { kind, .. } => *kind,
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Self::Pinned { .. })
    }

    pub fn sample(&self, adc: &mut impl AnalogInput) -> SensorSample {
        match *self {
            Self::Live(sensor) => sensor.sample(adc),
            Self::Pinned { kind, level } => SensorSample { kind, raw: None, level },
        }
    }
}
