//! Hardware adapter: bridges real peripherals to the domain ports.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 through the oneshot driver configured by
//! `hw_init` and drives GPIO directly.
//! On host/test: ADC values come from per-channel atomics that tests and
//! simulations inject; GPIO writes only update the pin's level field.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::app::ports::AnalogInput;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// ADC1 has ten channels on the ESP32-S3.
#[cfg(not(target_os = "espidf"))]
const ADC_CHANNEL_COUNT: usize = 10;

/// The ESP32-S3 ADC is 12-bit; the classifiers work on a 10-bit domain.
#[cfg(target_os = "espidf")]
const ADC_RESOLUTION_SHIFT: u32 = 2;

#[cfg(not(target_os = "espidf"))]
static SIM_ADC: [AtomicU16; ADC_CHANNEL_COUNT] = [const { AtomicU16::new(0) }; ADC_CHANNEL_COUNT];

/// Inject a 10-bit raw value for `channel`.  Out-of-range channels are
/// ignored.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u32, raw: u16) {
    if let Some(slot) = SIM_ADC.get(channel as usize) {
        slot.store(raw, Ordering::Relaxed);
    }
}

/// ADC1 reader implementing [`AnalogInput`].
pub struct AdcInput;

impl AdcInput {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_os = "espidf")]
    fn read_channel(&self, channel: u32) -> u16 {
        hw_init::adc1_read(channel) >> ADC_RESOLUTION_SHIFT
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_channel(&self, channel: u32) -> u16 {
        SIM_ADC
            .get(channel as usize)
            .map_or(0, |slot| slot.load(Ordering::Relaxed))
    }
}

impl Default for AdcInput {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogInput for AdcInput {
    fn read_raw(&mut self, channel: u32) -> u16 {
        self.read_channel(channel)
    }
}

/// A push-pull GPIO output usable by `embedded_hal` drivers.
pub struct GpioOutput {
    gpio: i32,
    high: bool,
}

impl GpioOutput {
    /// The pin must already be configured as an output by `hw_init`.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Last level successfully written.
    pub fn is_set_high(&self) -> bool {
        self.high
    }

    fn write(&mut self, high: bool) -> Result<(), ErrorKind> {
        check_rc(self.set_level(high))?;
        self.high = high;
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    fn set_level(&self, high: bool) -> i32 {
        hw_init::gpio_write(self.gpio, high)
    }

    #[cfg(not(target_os = "espidf"))]
    fn set_level(&self, _high: bool) -> i32 {
        ESP_OK
    }
}

const ESP_OK: i32 = 0;

/// Map an ESP-IDF status code onto an `embedded_hal` error.
fn check_rc(rc: i32) -> Result<(), ErrorKind> {
    if rc == ESP_OK {
        Ok(())
    } else {
        log::warn!("gpio: set_level returned {}", rc);
        Err(ErrorKind::Other)
    }
}

impl ErrorType for GpioOutput {
    type Error = ErrorKind;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}
