//! Irrigator firmware library.
//!
//! Exposes the pure decision logic for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;
pub mod scheduler;
pub mod sensors;
pub mod severity;

// Adapters and drivers compile on every target; the hardware paths inside
// are cfg-gated.
pub mod adapters;
pub mod drivers;
