//! Threshold-triggered capture through the public API

use fall_detection::capture::{
    CaptureConfig, CaptureConfigError, CaptureState, CaptureStateMachine, Channel,
};
use fall_detection::AxisSample;

const REST: AxisSample = AxisSample::new(0.0, 0.0, 1.0);

fn gyro(i: usize) -> AxisSample {
    AxisSample::new(i as f32, 0.0, 0.0)
}

#[test]
fn test_default_configuration() {
    let config = CaptureConfig::default();
    assert!((config.threshold - 1.5022).abs() < 1e-6);
    assert_eq!(config.window_len, 120);
    assert!(config.extra_samples < config.window_len);
    assert!(CaptureStateMachine::<120>::new(config).is_ok());
    assert_eq!(
        CaptureStateMachine::<100>::new(config).err(),
        Some(CaptureConfigError::InvalidWindowLength)
    );
}

#[test]
fn test_crossing_position_in_window() {
    let config = CaptureConfig {
        threshold: 1.5,
        window_len: 50,
        extra_samples: 20,
    };
    let mut capture = CaptureStateMachine::<64>::new(config).unwrap();

    let crossing = 80;
    let mut windows = Vec::new();
    for i in 0..200 {
        let accel = if i == crossing {
            AxisSample::new(0.0, 0.0, 2.5)
        } else {
            REST
        };
        if let Some(window) = capture.step(accel, gyro(i)) {
            windows.push((i, window));
        }
    }

    assert_eq!(windows.len(), 1);
    let (emitted_at, window) = &windows[0];
    assert_eq!(*emitted_at, crossing + 20);
    assert_eq!(window.len(), 50);
    // The crossing sits extra_samples from the end
    assert_eq!(window.acc_z()[50 - 1 - 20], 2.5);
    // Samples are in arrival order on every channel
    assert_eq!(window.gyro_x()[0], (crossing + 20 - 49) as f32);
    assert_eq!(window.gyro_x()[49], (crossing + 20) as f32);
}

#[test]
fn test_state_progression() {
    let config = CaptureConfig {
        threshold: 1.5,
        window_len: 4,
        extra_samples: 2,
    };
    let mut capture = CaptureStateMachine::<4>::new(config).unwrap();
    for i in 0..4 {
        assert!(capture.step(REST, gyro(i)).is_none());
    }
    assert_eq!(capture.state(), CaptureState::Filling);

    assert!(capture.step(AxisSample::new(2.0, 0.0, 0.0), gyro(4)).is_none());
    assert_eq!(capture.state(), CaptureState::ThresholdExceeded);

    assert!(capture.step(REST, gyro(5)).is_none());
    assert_eq!(capture.state(), CaptureState::ExtraCapture);
    assert_eq!(capture.extra_captured(), 1);

    let window = capture.step(REST, gyro(6)).unwrap();
    assert_eq!(capture.state(), CaptureState::Ready);
    assert_eq!(window.gyro_x(), &[3.0, 4.0, 5.0, 6.0]);

    capture.step(REST, gyro(7));
    assert_eq!(capture.state(), CaptureState::Filling);
    assert_eq!(capture.buffered(), 1);
    assert_eq!(capture.buffer(Channel::GyroX).latest(), Some(7.0));
}

#[test]
fn test_repeated_impacts_each_emit_once() {
    let config = CaptureConfig {
        threshold: 1.5,
        window_len: 10,
        extra_samples: 3,
    };
    let mut capture = CaptureStateMachine::<10>::new(config).unwrap();
    let mut emitted = 0;
    for i in 0..100 {
        // A new impact every 25 samples, enough to refill in between
        let accel = if i % 25 == 12 {
            AxisSample::new(0.0, 3.0, 0.0)
        } else {
            REST
        };
        if capture.step(accel, gyro(i)).is_some() {
            emitted += 1;
        }
    }
    assert_eq!(emitted, 4);
}
