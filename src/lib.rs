#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod capture;
pub mod classifier;
pub mod device;
pub mod features;
pub mod fifo;
pub mod interface;
pub mod output;
pub mod pipeline;
pub mod registers;
pub mod sensors;
pub mod storage;

// Re-export main types
pub use capture::{
    CaptureConfig, CaptureConfigError, CaptureState, CaptureStateMachine, Channel, RingBuffer,
    SignalWindow,
};
pub use classifier::{ClassScores, Classifier};
pub use device::Lsm9ds1Driver;
pub use features::{FEATURE_COUNT, FeatureVector, extract_features};
pub use fifo::{FifoMode, FifoStatus};
pub use interface::I2cBus;
pub use output::{Actuators, OutputError, OutputHandler};
pub use pipeline::{FallDetector, PipelineError, PollOutcome};
pub use sensors::{
    AccelBandwidth, AccelConfig, AccelFullScale, AccelOdr, Attitude, AxisSample,
    CalibrationBias, GyroConfig, GyroFullScale, GyroOdr, MagConfig, MagFullScale, MagMode,
    MagOdr, MagPerformance, MotionSensor, RawSample, SensorConfig, TempConfig,
};
pub use storage::{CsvFormat, SignalStore, StorageError, fall_name};

#[cfg(feature = "std")]
pub use storage::FileStore;

/// I2C address of the accelerometer/gyroscope device (SDO_AG high)
pub const ACCEL_GYRO_ADDRESS: u8 = 0x6B;

/// I2C address of the magnetometer device (SDO_M low)
pub const MAGNETOMETER_ADDRESS: u8 = 0x1E;

/// Expected `WHO_AM_I` value of the accelerometer/gyroscope device
pub const WHO_AM_I_AG_VALUE: u8 = 0x68;

/// Expected `WHO_AM_I_M` value of the magnetometer device
pub const WHO_AM_I_MAG_VALUE: u8 = 0x3D;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Identity register mismatch
    InvalidDevice {
        /// Bus address of the device that answered
        address: u8,
        /// Value read from its `WHO_AM_I` register
        found: u8,
    },
    /// The FIFO did not reach its threshold while calibrating
    CalibrationTimeout,
    /// Invalid configuration parameter
    InvalidConfig,
    /// The driver has not completed `begin()`
    NotStarted,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
