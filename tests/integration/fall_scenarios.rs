//! Recorded motion replayed through the full pipeline with default settings

use std::f32::consts::PI;

use crate::common::{CountingOutputs, MemoryStore, PeakClassifier, counts, started_driver};
use fall_detection::{
    AccelConfig, AccelFullScale, CaptureConfig, CaptureState, Channel, FallDetector,
    PollOutcome,
};

const SENSITIVITY_8G: f32 = 0.000_244;
const WINDOW: usize = 120;

type Detector = FallDetector<
    fall_detection::Lsm9ds1Driver<crate::common::MockI2c>,
    PeakClassifier,
    CountingOutputs,
    MemoryStore,
    WINDOW,
>;

fn detector_with(accel: Vec<[i16; 3]>) -> Detector {
    let (mut imu, bus) = started_driver();
    imu.configure_accelerometer(AccelConfig {
        full_scale: AccelFullScale::G8,
        ..AccelConfig::default()
    })
    .unwrap();
    bus.set_accel_sequence(accel);
    FallDetector::new(
        imu,
        CaptureConfig::default(),
        PeakClassifier::new(2.0),
        CountingOutputs::default(),
        MemoryStore::default(),
    )
    .unwrap()
}

/// 300 samples at rest with a half-sine burst peaking at 3 g from sample 150
fn burst_recording() -> Vec<[i16; 3]> {
    let mut z = vec![1.0f32; 300];
    for k in 0..10 {
        z[150 + k] = 1.0 + 2.0 * (PI * (k + 1) as f32 / 10.0).sin();
    }
    z.into_iter()
        .map(|g| [0, 0, counts(g, SENSITIVITY_8G)])
        .collect()
}

#[test]
fn test_burst_produces_exactly_one_window() {
    let mut detector = detector_with(burst_recording());

    let mut ready = 0;
    let mut outcomes = Vec::new();
    for _ in 0..300 {
        let outcome = detector.poll().unwrap();
        if detector.capture().state() == CaptureState::Ready {
            ready += 1;
        }
        if matches!(outcome, PollOutcome::Fall { .. } | PollOutcome::NotFall { .. }) {
            outcomes.push(outcome);
        }
    }

    assert_eq!(ready, 1);
    assert_eq!(outcomes.len(), 1);

    let PollOutcome::Fall { features, name, .. } = &outcomes[0] else {
        panic!("burst was not classified as a fall");
    };
    assert_eq!(name.as_str(), "FALL0.csv");
    assert!((features.max_magnitude() - 3.0).abs() < 0.01);
    assert!((features.min_magnitude() - 1.0).abs() < 0.01);
    assert!(features.max_slope(Channel::AccZ) > 0.0);
    assert!(features.std_dev(Channel::AccZ) > 0.0);
    assert!(features.windowed_std_xyz() > 0.0);
    // Nothing moved on the other axes
    assert_eq!(features.max_slope(Channel::AccX), 0.0);
    assert_eq!(features.max_slope(Channel::GyroZ), 0.0);

    let window = detector
        .store_mut()
        .files
        .get("FALL0.csv")
        .map(|text| text.lines().count());
    assert_eq!(window, Some(WINDOW));
}

#[test]
fn test_resting_device_never_captures() {
    let rest = vec![[0, 0, counts(1.0, SENSITIVITY_8G)]];
    let mut detector = detector_with(rest);

    for _ in 0..1000 {
        match detector.poll().unwrap() {
            PollOutcome::Sampled(state) => assert_eq!(state, CaptureState::Filling),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert_eq!(detector.fall_count(), 0);
    assert_eq!(detector.capture().buffered(), WINDOW);
}

#[test]
fn test_tilted_rest_never_captures() {
    // 1 g split across two axes
    let component = counts(core::f32::consts::FRAC_1_SQRT_2, SENSITIVITY_8G);
    let mut detector = detector_with(vec![[component, 0, component]]);

    for _ in 0..500 {
        assert!(matches!(detector.poll().unwrap(), PollOutcome::Sampled(_)));
    }
}
