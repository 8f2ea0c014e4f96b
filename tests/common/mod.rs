//! Common test utilities and mock implementations
#![allow(dead_code)]

pub mod test_utils;

pub use mock_i2c::{MockError, MockI2c, Operation};
pub use test_utils::{
    CountingOutputs, DriverError, MemoryStore, MockDelay, MockPin, MockPwm, PeakClassifier,
    assert_float_eq, counts, create_mock_driver, started_driver,
};
