//! Integration tests: CycleScheduler driving a full decider over many ticks.

use irrigator::app::events::CycleEvent;
use irrigator::config::SystemConfig;
use irrigator::control::decider::{ActionDecider, RunReason, Verdict};
use irrigator::scheduler::{CyclePhase, CycleScheduler};

use super::mock_hw::{MockAdc, MockPin, RecordingSink};

fn config() -> SystemConfig {
    SystemConfig {
        pump_run_ms: 500,
        cycle_delay_ms: 2_000,
        tick_interval_ms: 100,
        ..SystemConfig::default()
    }
}

#[test]
fn two_full_cycles_with_fixed_pump_runs() {
    let cfg = config();
    let (pin, writes) = MockPin::recording();
    let adc = MockAdc::board(600, 0, 900, 10);
    let mut d = ActionDecider::from_config(adc, pin, &cfg);
    let mut sched = CycleScheduler::new(&cfg);
    let mut sink = RecordingSink::default();

    // 1 decision tick + 5 watering ticks + 20 resting ticks = one cycle.
    let mut verdicts = Vec::new();
    for _ in 0..26 {
        if let Some(v) = sched.tick(cfg.tick_interval_ms, &mut d, &mut sink) {
            verdicts.push(v);
        }
    }
    assert_eq!(verdicts, vec![Verdict::Run(RunReason::Replenish); 2]);
    assert_eq!(sched.cycles(), 2);
    assert!(d.pump_is_on());

    // init low, on, off after run, on again.
    assert_eq!(*writes.borrow(), vec![false, true, false, true]);

    let stops = sink
        .events
        .iter()
        .filter(|e| matches!(e, CycleEvent::PumpStopped { .. }))
        .count();
    assert_eq!(stops, 1);
}

#[test]
fn pump_never_on_while_resting() {
    let cfg = config();
    let (pin, _) = MockPin::recording();
    let adc = MockAdc::board(600, 0, 900, 10);
    let mut d = ActionDecider::from_config(adc, pin, &cfg);
    let mut sched = CycleScheduler::new(&cfg);
    let mut sink = RecordingSink::default();

    for _ in 0..200 {
        sched.tick(cfg.tick_interval_ms, &mut d, &mut sink);
        if let CyclePhase::Resting { .. } = sched.phase() {
            assert!(!d.pump_is_on());
        }
    }
}
