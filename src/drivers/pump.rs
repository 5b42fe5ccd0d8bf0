//! Relay-switched water pump.
//!
//! A single digital output: HIGH runs the pump, LOW stops it.  The driver
//! keeps a software mirror of the last command; there is no read-back, so
//! a stuck relay or miswired pin is invisible here.
//!
//! ## Safety contract
//!
//! The pump must never run on a sensor fault or a dry reservoir.  That is
//! enforced by the action decider; this driver is a dumb actuator.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::{info, warn};

use crate::error::ActuatorError;

pub struct PumpActuator<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> PumpActuator<P> {
    /// Take ownership of the output and drive it LOW before anything else.
    pub fn new(pin: P) -> Self {
        let mut pump = Self { pin, on: false };
        pump.write(false);
        pump
    }

    /// Start the pump.  Repeating the call re-issues the write.
    pub fn turn_on(&mut self) {
        if !self.on {
            info!("pump: on");
        }
        self.on = true;
        self.write(true);
    }

    pub fn turn_off(&mut self) {
        if self.on {
            info!("pump: off");
        }
        self.on = false;
        self.write(false);
    }

    /// Last commanded state, not a hardware read-back.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Give the output pin back, e.g. to inspect a mock in tests.
    pub fn release(self) -> P {
        self.pin
    }

    fn write(&mut self, high: bool) {
        if let Err(e) = self.pin.set_state(PinState::from(high)) {
            warn!("pump: {} ({:?})", ActuatorError::GpioWriteFailed, e.kind());
        }
    }
}
