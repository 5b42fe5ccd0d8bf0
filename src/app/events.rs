//! Outbound events and the status snapshot.
//!
//! The [`CycleScheduler`](crate::scheduler::CycleScheduler) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use core::fmt;

use heapless::Vec;
use serde::Serialize;

use crate::control::decider::Verdict;
use crate::sensors::{SensorKind, SensorSample};

/// Structured events emitted once per decision cycle (or phase change).
#[derive(Debug, Clone)]
pub enum CycleEvent {
    /// Snapshot of every sensor plus the pump, taken before deciding.
    Status(StatusReport),
    /// The rule cascade ran; `verdict` says which rule settled it.
    Decided { cycle: u64, verdict: Verdict },
    /// The pump finished its fixed run and was switched off.
    PumpStopped { cycle: u64 },
}

/// Point-in-time snapshot of `{sensor, raw, severity}` plus pump state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub samples: Vec<SensorSample, 4>,
    pub pump_on: bool,
}

impl StatusReport {
    pub fn new(pump_on: bool) -> Self {
        Self {
            samples: Vec::new(),
            pump_on,
        }
    }

    /// Append a sample.  Extra samples beyond one per sensor kind are
    /// dropped.
    pub fn push(&mut self, sample: SensorSample) {
        if self.samples.push(sample).is_err() {
            log::warn!("status report full, dropping {} sample", sample.kind);
        }
    }

    pub fn sample(&self, kind: SensorKind) -> Option<&SensorSample> {
        self.samples.iter().find(|s| s.kind == kind)
    }

    /// Compact single-line JSON for machine consumption.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for StatusReport {
    /// Multi-line console dump.  Pinned sensors show no raw value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            writeln!(f, "{}", sample.kind)?;
            match sample.raw {
                Some(raw) => writeln!(f, "Raw sensor value: {raw}")?,
                None => writeln!(f, "Raw sensor value: n/a (pinned)")?,
            }
            writeln!(f, "State: {}", sample.level)?;
        }
        write!(f, "\nPump is: {}", if self.pump_on { " On" } else { "Off" })
    }
}
