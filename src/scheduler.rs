//! Decision-cycle scheduler.
//!
//! Sequences *decide → water for a fixed time → rest* on top of an
//! externally supplied tick, so the loop is testable without sleeping.
//!
//! ```text
//!        ┌──────────── rest elapsed ─────────────┐
//!        ▼                                       │
//!   ┌─────────┐  run   ┌──────────┐  run done  ┌─┴───────┐
//!   │   Due   ├───────▶│ Watering ├───────────▶│ Resting │
//!   └────┬────┘        └──────────┘  pump off  └─────────┘
//!        │ hold / veto                              ▲
//!        └──────────────────────────────────────────┘
//! ```
//!
//! Nothing from a previous cycle feeds into the next decision; the only
//! state carried across ticks is the phase timer.

use embedded_hal::digital::OutputPin;
use log::info;

use crate::app::events::CycleEvent;
use crate::app::ports::{AnalogInput, EventSink};
use crate::config::SystemConfig;
use crate::control::decider::{ActionDecider, Verdict};

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// The next tick runs a decision.
    Due,
    /// Pump running; stops when `remaining_ms` reaches zero.
    Watering { remaining_ms: u32 },
    /// Waiting before the next decision.
    Resting { remaining_ms: u32 },
}

/// The decision loop.  Constructed once; call [`tick`](Self::tick) from
/// whatever timer source the platform has.
pub struct CycleScheduler {
    phase: CyclePhase,
    pump_run_ms: u32,
    cycle_delay_ms: u32,
    report_each_cycle: bool,
    cycles: u64,
}

impl CycleScheduler {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            phase: CyclePhase::Due,
            pump_run_ms: config.pump_run_ms,
            cycle_delay_ms: config.cycle_delay_ms,
            report_each_cycle: config.report_each_cycle,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Number of decisions made so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Advance by `elapsed_ms`.  Returns the verdict when this tick ran a
    /// decision.
    pub fn tick<A, P>(
        &mut self,
        elapsed_ms: u32,
        decider: &mut ActionDecider<A, P>,
        sink: &mut impl EventSink,
    ) -> Option<Verdict>
    where
        A: AnalogInput,
        P: OutputPin,
    {
        match self.phase {
            CyclePhase::Due => Some(self.run_decision(decider, sink)),

            CyclePhase::Watering { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    decider.turn_off_pump();
                    sink.emit(&CycleEvent::PumpStopped { cycle: self.cycles });
                    self.rest();
                } else {
                    self.phase = CyclePhase::Watering { remaining_ms };
                }
                None
            }

            CyclePhase::Resting { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.phase = CyclePhase::Due;
                    Some(self.run_decision(decider, sink))
                } else {
                    self.phase = CyclePhase::Resting { remaining_ms };
                    None
                }
            }
        }
    }

    fn run_decision<A, P>(
        &mut self,
        decider: &mut ActionDecider<A, P>,
        sink: &mut impl EventSink,
    ) -> Verdict
    where
        A: AnalogInput,
        P: OutputPin,
    {
        self.cycles += 1;

        if self.report_each_cycle {
            sink.emit(&CycleEvent::Status(decider.status_report()));
        }

        let verdict = decider.evaluate_and_actuate();
        sink.emit(&CycleEvent::Decided {
            cycle: self.cycles,
            verdict,
        });

        if verdict.runs_pump() {
            info!(
                "cycle {}: watering for {} ms ({:?})",
                self.cycles, self.pump_run_ms, verdict
            );
            self.phase = CyclePhase::Watering {
                remaining_ms: self.pump_run_ms,
            };
        } else {
            self.rest();
        }
        verdict
    }

    fn rest(&mut self) {
        self.phase = CyclePhase::Resting {
            remaining_ms: self.cycle_delay_ms,
        };
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
