//! System configuration parameters
//!
//! All tunable parameters for the irrigation controller.  Channel and pin
//! numbers are fixed in [`crate::pins`]; everything here can be persisted
//! as a compact postcard blob and validated on load.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::severity::SeverityLevel;

/// Where a sensor's severity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorSource {
    /// Read the probe every cycle.
    Live,
    /// Take the probe out of circuit and report a fixed severity.
    Pinned(SeverityLevel),
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Sensor sources ---
    pub soil_moisture: SensorSource,
    /// Pinned to `Ok` by default: the reference probe reads a constant
    /// value no matter the solution.
    pub ph: SensorSource,
    pub water_level: SensorSource,
    pub water_detection: SensorSource,

    // --- Timing ---
    /// How long the pump runs after a positive decision (milliseconds)
    pub pump_run_ms: u32,
    /// Pause between decision cycles (milliseconds)
    pub cycle_delay_ms: u32,
    /// Scheduler tick period (milliseconds)
    pub tick_interval_ms: u32,

    // --- Reporting ---
    /// Emit a full status dump before every decision
    pub report_each_cycle: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            soil_moisture: SensorSource::Live,
            ph: SensorSource::Pinned(SeverityLevel::Ok),
            water_level: SensorSource::Live,
            water_detection: SensorSource::Live,

            pump_run_ms: 5_000,
            cycle_delay_ms: 60_000,
            tick_interval_ms: 100,

            report_each_cycle: true,
        }
    }
}

impl SystemConfig {
    /// Reject values the scheduler or decider cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pump_run_ms == 0 {
            return Err(ConfigError::ValidationFailed("pump_run_ms must be > 0"));
        }
        if self.cycle_delay_ms == 0 {
            return Err(ConfigError::ValidationFailed("cycle_delay_ms must be > 0"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if self.tick_interval_ms > self.cycle_delay_ms {
            return Err(ConfigError::ValidationFailed(
                "tick_interval_ms must not exceed cycle_delay_ms",
            ));
        }
        let sources = [
            self.soil_moisture,
            self.ph,
            self.water_level,
            self.water_detection,
        ];
        if sources.contains(&SensorSource::Pinned(SeverityLevel::Invalid)) {
            return Err(ConfigError::ValidationFailed(
                "a sensor cannot be pinned to INVALID_STATE",
            ));
        }
        Ok(())
    }

    /// Encode for flash storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Corrupted)
    }

    /// Decode a stored blob and validate it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.ph, SensorSource::Pinned(SeverityLevel::Ok));
        assert_eq!(c.soil_moisture, SensorSource::Live);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = SystemConfig::default();
        assert!(
            c.tick_interval_ms < c.pump_run_ms,
            "ticks should be finer than a pump run"
        );
        assert!(
            c.pump_run_ms < c.cycle_delay_ms,
            "pump runs should be shorter than the pause between cycles"
        );
    }

    #[test]
    fn zero_durations_rejected() {
        let c = SystemConfig {
            pump_run_ms: 0,
            ..SystemConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ValidationFailed("pump_run_ms must be > 0"))
        );

        let c = SystemConfig {
            cycle_delay_ms: 0,
            ..SystemConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn tick_longer_than_delay_rejected() {
        let c = SystemConfig {
            tick_interval_ms: 10_000,
            cycle_delay_ms: 1_000,
            ..SystemConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn pinning_to_invalid_rejected() {
        let c = SystemConfig {
            water_level: SensorSource::Pinned(SeverityLevel::Invalid),
            ..SystemConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = SystemConfig {
            ph: SensorSource::Live,
            pump_run_ms: 3_000,
            ..SystemConfig::default()
        };
        let bytes = c.to_bytes().unwrap();
        assert_eq!(SystemConfig::from_bytes(&bytes), Ok(c));
    }

    #[test]
    fn garbage_blob_is_corrupted() {
        assert_eq!(SystemConfig::from_bytes(&[0xFF; 3]), Err(ConfigError::Corrupted));
    }

    #[test]
    fn stored_invalid_config_is_rejected_on_load() {
        let c = SystemConfig {
            pump_run_ms: 0,
            ..SystemConfig::default()
        };
        let bytes = postcard::to_allocvec(&c).unwrap();
        assert!(matches!(
            SystemConfig::from_bytes(&bytes),
            Err(ConfigError::ValidationFailed(_))
        ));
    }
}
