//! Port traits: the boundary between decision logic and the outside world.
//!
//! ```text
//!   AnalogInput ──▶ ActionDecider ──▶ OutputPin (pump)
//!                        │
//!                        ▼
//!                    EventSink
//! ```
//!
//! Adapters implement these traits; the domain consumes them through
//! generics, so everything above the adapters runs on the host under test.

use super::events::CycleEvent;

// ───────────────────────────────────────────────────────────────
// Analog input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Bounded analog read.
///
/// Implementations return a value in `0..=1023`; the domain performs no
/// retry or filtering and treats anything larger as an invalid reading.
pub trait AnalogInput {
    fn read_raw(&mut self, channel: u32) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_raw(&mut self, channel: u32) -> u16 {
        (**self).read_raw(channel)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / console)
// ───────────────────────────────────────────────────────────────

/// Receives status dumps and decision outcomes.  The text format is the
/// adapter's business.
pub trait EventSink {
    fn emit(&mut self, event: &CycleEvent);
}
