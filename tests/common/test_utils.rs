//! Test utilities and helper implementations

use crate::common::mock_i2c::{MockError, MockI2c};
use fall_detection::{
    Actuators, ClassScores, Classifier, FeatureVector, Lsm9ds1Driver, SignalStore, SignalWindow,
    StorageError,
    storage::{CsvFormat, decode_window, encode_window},
};
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use std::collections::HashMap;
use std::convert::Infallible;

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDelay {
    pub elapsed_ns: u64,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

/// Driver over a fresh mock bus, plus a handle sharing the bus state
pub fn create_mock_driver() -> (Lsm9ds1Driver<MockI2c>, MockI2c) {
    let bus = MockI2c::new();
    let handle = bus.clone();
    (Lsm9ds1Driver::new(bus), handle)
}

/// Driver that has completed `begin()` with the default configuration
pub fn started_driver() -> (Lsm9ds1Driver<MockI2c>, MockI2c) {
    let (mut driver, bus) = create_mock_driver();
    driver
        .begin(&mut MockDelay::default())
        .expect("begin on mock bus");
    bus.clear_operations();
    (driver, bus)
}

/// Raw counts for `g` at the given sensitivity (g per LSB)
pub fn counts(g: f32, sensitivity: f32) -> i16 {
    (g / sensitivity).round() as i16
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {a} vs {b} (diff: {diff}, epsilon: {epsilon})"
    );
}

pub type DriverError = fall_detection::Error<MockError>;

/// Calls a window a fall when its peak acceleration reaches `peak_g`
#[derive(Debug, Clone, Copy)]
pub struct PeakClassifier {
    pub peak_g: f32,
    pub calls: usize,
}

impl PeakClassifier {
    pub fn new(peak_g: f32) -> Self {
        Self { peak_g, calls: 0 }
    }
}

impl Classifier for PeakClassifier {
    type Error = Infallible;

    fn classify(&mut self, features: &FeatureVector) -> Result<ClassScores, Self::Error> {
        self.calls += 1;
        Ok(ClassScores::new(self.peak_g, features.max_magnitude()))
    }
}

/// PWM channel that remembers its duty cycle
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPwm {
    pub duty: u16,
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

/// GPIO that remembers its level
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPin {
    pub high: bool,
    pub toggles: usize,
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.toggles += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.toggles += 1;
        Ok(())
    }
}

/// Actuators that only count commands
#[derive(Debug, Default)]
pub struct CountingOutputs {
    pub alarms: usize,
    pub wakes: usize,
}

impl Actuators for CountingOutputs {
    type Error = Infallible;

    fn raise_alarm(&mut self) -> Result<(), Self::Error> {
        self.alarms += 1;
        Ok(())
    }

    fn clear_alarm(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn wake_companion(&mut self) -> Result<(), Self::Error> {
        self.wakes += 1;
        Ok(())
    }

    fn release_companion(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// In-memory CSV files keyed by name
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub files: HashMap<String, String>,
    pub unavailable: bool,
}

impl SignalStore for MemoryStore {
    fn write<const N: usize>(
        &mut self,
        name: &str,
        window: &SignalWindow<N>,
        overwrite: bool,
    ) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        let mut text = String::new();
        encode_window(window, &mut text, CsvFormat::default())?;
        let file = self.files.entry(name.to_string()).or_default();
        if overwrite {
            file.clear();
        }
        file.push_str(&text);
        Ok(())
    }

    fn read<const N: usize>(&mut self, name: &str) -> Result<SignalWindow<N>, StorageError> {
        let text = self.files.get(name).ok_or(StorageError::Unavailable)?;
        decode_window(text)
    }
}
