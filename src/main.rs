//! Irrigator Firmware: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Adapters:  AdcInput (AnalogInput)  GpioOutput (pump)    │
//! │             LogEventSink (EventSink)                     │
//! │  ──────────────── Port boundary ─────────────────────    │
//! │  ActionDecider (classifiers · rule cascade · pump)       │
//! │  CycleScheduler (decide → water → rest, tick-driven)     │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{error, info};

use irrigator::adapters::hardware::{AdcInput, GpioOutput};
use irrigator::adapters::log_sink::LogEventSink;
use irrigator::config::SystemConfig;
use irrigator::control::decider::ActionDecider;
use irrigator::drivers::hw_init;
use irrigator::pins;
use irrigator::scheduler::CycleScheduler;

/// Bring up peripherals and settle on a validated configuration.
fn boot() -> irrigator::error::Result<SystemConfig> {
    hw_init::init_peripherals()?;
    let config = SystemConfig::default();
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Irrigator v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals + config ───────────────────────────────
    let config = match boot() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("boot failed: {}, halting", e);
            return Err(e.into());
        }
    };
    info!("Config: {:?}", config);

    // ── 3. Decider + loop ─────────────────────────────────────
    let mut decider = ActionDecider::from_config(
        AdcInput::new(),
        GpioOutput::new(pins::PUMP_GPIO),
        &config,
    );
    let mut scheduler = CycleScheduler::new(&config);
    let mut sink = LogEventSink::new();

    info!("System ready. Entering decision loop.");

    let period = Duration::from_millis(u64::from(config.tick_interval_ms));
    let mut last = Instant::now();
    loop {
        std::thread::sleep(period);
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis().min(u128::from(u32::MAX)) as u32;
        last = now;
        scheduler.tick(elapsed_ms, &mut decider, &mut sink);
    }
}
