//! Application boundary: port traits and the events crossing them.
//!
//! The decision core never touches hardware directly.  It reads raw
//! samples through [`ports::AnalogInput`], drives the pump through an
//! `embedded_hal` output pin, and reports through [`ports::EventSink`].

pub mod events;
pub mod ports;
