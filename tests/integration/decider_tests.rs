//! Integration tests: raw ADC values → classifiers → rule cascade → pump.

use irrigator::config::{SensorSource, SystemConfig};
use irrigator::control::decider::{ActionDecider, RunReason, Verdict, Veto};
use irrigator::pins;
use irrigator::sensors::SensorKind;
use irrigator::severity::SeverityLevel;

use super::mock_hw::{MockAdc, MockPin};

// Raw values picked from the middle of each band.
const SOIL_BONE_DRY: u16 = 800;
const SOIL_DAMP: u16 = 600;
const SOIL_SOAKED: u16 = 200;
const LEVEL_FULL: u16 = 900;
const LEVEL_LOW: u16 = 300;
const LEVEL_EMPTY: u16 = 100;
const DETECT_DRY: u16 = 10;
const DETECT_WET: u16 = 600;
const PH_NEUTRAL: u16 = 480; // ≈ 6.57

fn live_ph() -> SystemConfig {
    SystemConfig {
        ph: SensorSource::Live,
        ..SystemConfig::default()
    }
}

#[test]
fn damp_soil_full_tank_waters() {
    let (pin, writes) = MockPin::recording();
    let adc = MockAdc::board(SOIL_DAMP, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());

    assert!(d.decide_and_actuate());
    assert!(d.pump_is_on());
    assert_eq!(*writes.borrow(), vec![false, true]);
}

#[test]
fn soaked_soil_stops_the_pump() {
    let (pin, writes) = MockPin::recording();
    let adc = MockAdc::board(SOIL_SOAKED, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());

    assert_eq!(d.evaluate_and_actuate(), Verdict::Hold);
    assert!(!d.pump_is_on());
    assert_eq!(*writes.borrow(), vec![false, false]);
}

#[test]
fn empty_tank_vetoes_even_bone_dry_soil() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(SOIL_BONE_DRY, 0, LEVEL_EMPTY, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());

    assert_eq!(d.evaluate_and_actuate(), Verdict::Vetoed(Veto::ReservoirEmpty));
    assert!(!d.pump_is_on());
}

#[test]
fn bone_dry_soil_overrides_standing_water() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(SOIL_BONE_DRY, 0, LEVEL_LOW, DETECT_WET);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());

    assert_eq!(d.evaluate_and_actuate(), Verdict::Run(RunReason::BoneDryOverride));
    assert!(d.pump_is_on());
}

#[test]
fn out_of_domain_reading_vetoes() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(2000, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());

    assert_eq!(
        d.evaluate_and_actuate(),
        Verdict::Vetoed(Veto::InvalidReading(SensorKind::SoilMoisture))
    );
    assert!(!d.pump_is_on());
}

#[test]
fn fault_after_watering_turns_pump_off() {
    let (pin, writes) = MockPin::recording();
    let adc = MockAdc::board(SOIL_DAMP, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());
    assert!(d.decide_and_actuate());

    let (mut adc, sensors, pump) = d.into_parts();
    adc.set(pins::WATER_LEVEL_ADC_CH, 1500);
    let mut d = ActionDecider::new(adc, sensors, pump);

    assert!(!d.decide_and_actuate());
    assert!(!d.pump_is_on());
    assert_eq!(writes.borrow().last(), Some(&false));
}

#[test]
fn pinned_ph_is_never_read() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(SOIL_DAMP, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());
    d.decide_action();

    let (adc, sensors, _) = d.into_parts();
    assert!(sensors.ph.is_pinned());
    assert!(!adc.reads.contains(&pins::PH_ADC_CH));
}

#[test]
fn live_ph_in_range_allows_watering() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(SOIL_DAMP, PH_NEUTRAL, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &live_ph());

    assert_eq!(d.sample_all().ph.level, SeverityLevel::Ok);
    assert!(d.decide_action());
}

#[test]
fn live_alkaline_ph_vetoes() {
    let (pin, _) = MockPin::recording();
    // Raw 700 → pH ≈ 9.6 → TooHigh.
    let adc = MockAdc::board(SOIL_BONE_DRY, 700, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &live_ph());

    assert_eq!(d.evaluate_and_actuate(), Verdict::Vetoed(Veto::PhOutOfRange));
}

#[test]
fn decide_action_leaves_pump_alone() {
    let (pin, writes) = MockPin::recording();
    let adc = MockAdc::board(SOIL_DAMP, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());

    assert!(d.decide_action());
    assert!(!d.pump_is_on());
    assert_eq!(*writes.borrow(), vec![false]);
}

#[test]
fn manual_turn_off_overrides() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(SOIL_DAMP, 0, LEVEL_FULL, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());
    d.decide_and_actuate();
    d.turn_off_pump();
    assert!(!d.pump_is_on());
}

#[test]
fn status_report_reflects_readings_and_pump() {
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(SOIL_BONE_DRY, 0, LEVEL_LOW, DETECT_DRY);
    let mut d = ActionDecider::from_config(adc, pin, &SystemConfig::default());
    assert!(d.decide_and_actuate());

    let report = d.status_report();
    assert!(report.pump_on);
    assert_eq!(report.samples.len(), 4);

    let soil = report.sample(SensorKind::SoilMoisture).unwrap();
    assert_eq!(soil.raw, Some(SOIL_BONE_DRY));
    assert_eq!(soil.level, SeverityLevel::TooLow);

    let ph = report.sample(SensorKind::Ph).unwrap();
    assert_eq!(ph.raw, None);
    assert_eq!(ph.level, SeverityLevel::Ok);

    let text = report.to_string();
    assert!(text.contains("Water level\nRaw sensor value: 300\nState: DANGER_LOW\n"));
    assert!(text.contains("PH\nRaw sensor value: n/a (pinned)\n"));
    assert!(text.ends_with("Pump is:  On"));
}
