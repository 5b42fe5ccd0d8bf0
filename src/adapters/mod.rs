//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements            | Connects to                |
//! |------------|-----------------------|----------------------------|
//! | `hardware` | AnalogInput           | ESP32 ADC1 oneshot         |
//! |            | embedded-hal OutputPin| ESP32 GPIO (pump relay)    |
//! | `log_sink` | EventSink             | Serial log output          |

pub mod hardware;
pub mod log_sink;
