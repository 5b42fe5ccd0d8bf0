//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing cycle events to the logger (which
//! goes to UART / USB-CDC in production).  The status dump is logged as
//! human-readable text at `info` and as a JSON line at `debug`.

use log::{debug, info, warn};

use crate::app::events::CycleEvent;
use crate::app::ports::EventSink;
use crate::control::decider::Verdict;

/// Adapter that logs every [`CycleEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &CycleEvent) {
        match event {
            CycleEvent::Status(report) => {
                info!("STATUS\n{}", report);
                match report.to_json() {
                    Ok(json) => debug!("STATUS | {}", json),
                    Err(e) => warn!("STATUS | json encode failed: {}", e),
                }
            }
            CycleEvent::Decided { cycle, verdict } => match verdict {
                Verdict::Run(reason) => info!("CYCLE {} | pump ON ({:?})", cycle, reason),
                Verdict::Vetoed(veto) => info!("CYCLE {} | pump OFF, vetoed ({:?})", cycle, veto),
                Verdict::Hold => info!("CYCLE {} | pump OFF", cycle),
            },
            CycleEvent::PumpStopped { cycle } => {
                info!("CYCLE {} | run complete, pump OFF", cycle);
            }
        }
    }
}
