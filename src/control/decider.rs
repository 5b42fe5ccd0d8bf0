//! Rule-based pump decider.
//!
//! [`evaluate`] runs an ordered cascade over the four severity states and
//! stops at the first rule that matches:
//!
//! 1. any state is `Invalid`            → veto (never water on a fault)
//! 2. water level is `TooLow`           → veto (reservoir empty)
//! 3. pH is `TooLow` or `TooHigh`       → veto
//! 4. detection `Ok`, level in `Ok..=TooHigh`, soil in
//!    `TooLow..=DangerHigh`              → run (normal replenishment)
//! 5. detection `Ok`/`TooHigh` and soil `TooLow`
//!                                       → run (bone-dry override)
//! 6. otherwise                          → hold
//!
//! Rules 4 and 5 use ordinal range checks, which are only meaningful
//! because rule 1 has already excluded the invalid sentinel.
//!
//! The decision is stateless: the previous pump state never feeds back.

use embedded_hal::digital::OutputPin;
use log::{debug, warn};
use serde::Serialize;

use crate::app::events::StatusReport;
use crate::app::ports::AnalogInput;
use crate::config::SystemConfig;
use crate::drivers::pump::PumpActuator;
use crate::pins;
use crate::sensors::{SensorKind, SensorSample, SensorSlot};
use crate::severity::SeverityLevel;

// ───────────────────────────────────────────────────────────────
// Pure rule cascade
// ───────────────────────────────────────────────────────────────

/// The four classified inputs of one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorStates {
    pub soil_moisture: SeverityLevel,
    pub ph: SeverityLevel,
    pub water_level: SeverityLevel,
    pub water_detection: SeverityLevel,
}

impl SensorStates {
    /// States in `SensorKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (SensorKind, SeverityLevel)> {
        [
            (SensorKind::SoilMoisture, self.soil_moisture),
            (SensorKind::Ph, self.ph),
            (SensorKind::WaterLevel, self.water_level),
            (SensorKind::WaterDetection, self.water_detection),
        ]
        .into_iter()
    }
}

/// Why the pump was kept off by a safety rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Veto {
    /// The first sensor found reporting `Invalid`.
    InvalidReading(SensorKind),
    ReservoirEmpty,
    PhOutOfRange,
}

/// Why the pump was allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunReason {
    Replenish,
    BoneDryOverride,
}

/// Outcome of one pass through the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Vetoed(Veto),
    Run(RunReason),
    /// No positive rule matched.
    Hold,
}

impl Verdict {
    pub fn runs_pump(self) -> bool {
        matches!(self, Self::Run(_))
    }
}

pub fn evaluate(states: &SensorStates) -> Verdict {
    use SeverityLevel::{DangerHigh, Ok, TooHigh, TooLow};

    if let Some((kind, _)) = states.iter().find(|(_, level)| level.is_invalid()) {
        return Verdict::Vetoed(Veto::InvalidReading(kind));
    }

    if states.water_level == TooLow {
        return Verdict::Vetoed(Veto::ReservoirEmpty);
    }

    if matches!(states.ph, TooLow | TooHigh) {
        return Verdict::Vetoed(Veto::PhOutOfRange);
    }

    // pH already known to be DangerLow..=DangerHigh from here on.
    if states.water_detection == Ok
        && states.water_level.within(Ok, TooHigh)
        && states.soil_moisture.within(TooLow, DangerHigh)
    {
        return Verdict::Run(RunReason::Replenish);
    }

    // Bone-dry topsoil wins over water pooled at the bottom of the pot.
    if matches!(states.water_detection, Ok | TooHigh) && states.soil_moisture == TooLow {
        return Verdict::Run(RunReason::BoneDryOverride);
    }

    Verdict::Hold
}

/// `true` when the pump should run.
pub fn decide(states: &SensorStates) -> bool {
    evaluate(states).runs_pump()
}

// ───────────────────────────────────────────────────────────────
// ActionDecider: owns the probes and the pump
// ───────────────────────────────────────────────────────────────

/// Every sample taken in one pass, in `SensorKind::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshot {
    pub soil_moisture: SensorSample,
    pub ph: SensorSample,
    pub water_level: SensorSample,
    pub water_detection: SensorSample,
}

impl SensorSnapshot {
    pub fn states(&self) -> SensorStates {
        SensorStates {
            soil_moisture: self.soil_moisture.level,
            ph: self.ph.level,
            water_level: self.water_level.level,
            water_detection: self.water_detection.level,
        }
    }

    pub fn samples(&self) -> [SensorSample; 4] {
        [
            self.soil_moisture,
            self.ph,
            self.water_level,
            self.water_detection,
        ]
    }
}

/// The four probe slots, bound to their channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSet {
    pub soil_moisture: SensorSlot,
    pub ph: SensorSlot,
    pub water_level: SensorSlot,
    pub water_detection: SensorSlot,
}

impl SensorSet {
    /// Bind each probe to its board channel, live or pinned per `config`.
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            soil_moisture: SensorSlot::from_source(
                SensorKind::SoilMoisture,
                pins::SOIL_MOISTURE_ADC_CH,
                config.soil_moisture,
            ),
            ph: SensorSlot::from_source(SensorKind::Ph, pins::PH_ADC_CH, config.ph),
            water_level: SensorSlot::from_source(
                SensorKind::WaterLevel,
                pins::WATER_LEVEL_ADC_CH,
                config.water_level,
            ),
            water_detection: SensorSlot::from_source(
                SensorKind::WaterDetection,
                pins::WATER_DETECTION_ADC_CH,
                config.water_detection,
            ),
        }
    }
}

/// Owns one slot per probe plus the pump; constructed once at boot.
pub struct ActionDecider<A, P> {
    adc: A,
    sensors: SensorSet,
    pump: PumpActuator<P>,
}

impl<A: AnalogInput, P: OutputPin> ActionDecider<A, P> {
    pub fn new(adc: A, sensors: SensorSet, pump: PumpActuator<P>) -> Self {
        for slot in [
            sensors.soil_moisture,
            sensors.ph,
            sensors.water_level,
            sensors.water_detection,
        ] {
            if let SensorSlot::Pinned { kind, level } = slot {
                warn!("decider: {} pinned to {} (probe out of circuit)", kind, level);
            }
        }
        Self { adc, sensors, pump }
    }

    /// Convenience constructor wiring slots from `config` and the board pins.
    pub fn from_config(adc: A, pump_pin: P, config: &SystemConfig) -> Self {
        Self::new(adc, SensorSet::from_config(config), PumpActuator::new(pump_pin))
    }

    /// Read and classify every probe once.
    pub fn sample_all(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture: self.sensors.soil_moisture.sample(&mut self.adc),
            ph: self.sensors.ph.sample(&mut self.adc),
            water_level: self.sensors.water_level.sample(&mut self.adc),
            water_detection: self.sensors.water_detection.sample(&mut self.adc),
        }
    }

    /// Sample the probes and run the cascade, without touching the pump.
    pub fn evaluate(&mut self) -> Verdict {
        let states = self.sample_all().states();
        let verdict = evaluate(&states);
        if let Verdict::Vetoed(Veto::InvalidReading(kind)) = verdict {
            warn!("decider: {} reading invalid, pump vetoed", kind);
        }
        debug!("decider: {:?} -> {:?}", states, verdict);
        verdict
    }

    /// Whether the pump should run given the current readings.
    pub fn decide_action(&mut self) -> bool {
        self.evaluate().runs_pump()
    }

    /// Decide, then switch the pump to match.  Returns the verdict.
    pub fn evaluate_and_actuate(&mut self) -> Verdict {
        let verdict = self.evaluate();
        if verdict.runs_pump() {
            self.pump.turn_on();
        } else {
            self.pump.turn_off();
        }
        verdict
    }

    /// Decide, then switch the pump to match.  Returns the decision.
    pub fn decide_and_actuate(&mut self) -> bool {
        self.evaluate_and_actuate().runs_pump()
    }

    /// Manual override: stop the pump regardless of the readings.
    pub fn turn_off_pump(&mut self) {
        self.pump.turn_off();
    }

    pub fn pump_is_on(&self) -> bool {
        self.pump.is_on()
    }

    /// Fresh snapshot of every probe plus the pump, for reporting.
    pub fn status_report(&mut self) -> StatusReport {
        let snapshot = self.sample_all();
        let mut report = StatusReport::new(self.pump.is_on());
        for sample in snapshot.samples() {
            report.push(sample);
        }
        report
    }

    /// Tear down into parts, e.g. to inspect mocks in tests.
    pub fn into_parts(self) -> (A, SensorSet, PumpActuator<P>) {
        (self.adc, self.sensors, self.pump)
    }
}
