//! ADC channel and GPIO assignments for the controller board.
//!
//! Single source of truth: every binding is referenced from here rather
//! than hard-coded at the call site.
//!
//! On the ESP32-S3, ADC1 channel *n* is routed to GPIO *n + 1*.

// ---------------------------------------------------------------------------
// Sensors, Analog (ADC1)
// ---------------------------------------------------------------------------

/// Capacitive soil-moisture probe.  ADC1 channel 1 (GPIO 2).
pub const SOIL_MOISTURE_ADC_CH: u32 = 1;
/// pH probe amplifier board.  ADC1 channel 2 (GPIO 3).
pub const PH_ADC_CH: u32 = 2;
/// Reservoir water-level strip.  ADC1 channel 3 (GPIO 4).
pub const WATER_LEVEL_ADC_CH: u32 = 3;
/// Water-detection probe at the pot bottom.  ADC1 channel 6 (GPIO 7).
pub const WATER_DETECTION_ADC_CH: u32 = 6;

/// Every ADC1 channel that needs configuring at boot.
pub const ADC_CHANNELS: [u32; 4] = [
    SOIL_MOISTURE_ADC_CH,
    PH_ADC_CH,
    WATER_LEVEL_ADC_CH,
    WATER_DETECTION_ADC_CH,
];

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Digital output to the pump relay: HIGH = pump running.
pub const PUMP_GPIO: i32 = 10;

