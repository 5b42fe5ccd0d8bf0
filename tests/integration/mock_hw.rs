//! Mock hardware adapters for integration tests.
//!
//! `MockAdc` serves fixed raw values per channel; `MockPin` records every
//! write so tests can assert on the full command history.

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use irrigator::app::events::CycleEvent;
use irrigator::app::ports::{AnalogInput, EventSink};
use irrigator::pins;

// ── Analog input ──────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct MockAdc {
    values: HashMap<u32, u16>,
    pub reads: Vec<u32>,
}

#[allow(dead_code)]
impl MockAdc {
    /// Board with the given raw values on the four probe channels.
    pub fn board(soil: u16, ph: u16, level: u16, detection: u16) -> Self {
        let mut adc = Self::default();
        adc.set(pins::SOIL_MOISTURE_ADC_CH, soil);
        adc.set(pins::PH_ADC_CH, ph);
        adc.set(pins::WATER_LEVEL_ADC_CH, level);
        adc.set(pins::WATER_DETECTION_ADC_CH, detection);
        adc
    }

    pub fn set(&mut self, channel: u32, raw: u16) {
        self.values.insert(channel, raw);
    }
}

impl AnalogInput for MockAdc {
    fn read_raw(&mut self, channel: u32) -> u16 {
        self.reads.push(channel);
        self.values.get(&channel).copied().unwrap_or(0)
    }
}

// ── Digital output ────────────────────────────────────────────

/// Write log shared with the test so it survives the pin being moved into
/// the decider.
pub type WriteLog = Rc<RefCell<Vec<bool>>>;

pub struct MockPin {
    log: WriteLog,
}

impl MockPin {
    pub fn recording() -> (Self, WriteLog) {
        let log = WriteLog::default();
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(true);
        Ok(())
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<CycleEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &CycleEvent) {
        self.events.push(event.clone());
    }
}
