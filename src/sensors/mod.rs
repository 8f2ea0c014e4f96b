//! Sensor modules for the LSM9DS1
//!
//! This module provides types, enums, and configuration structures for each sensor
//! in the LSM9DS1:
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//! - Magnetometer (3-axis, separate bus device)
//! - Die temperature
//!
//! Register access goes through [`Lsm9ds1Driver`](crate::Lsm9ds1Driver). Consumers
//! that only need calibrated samples depend on the [`MotionSensor`] trait instead.

pub mod accelerometer;
pub mod attitude;
pub mod gyroscope;
pub mod magnetometer;
pub mod sample;
pub mod temperature;

// Re-export main types
pub use accelerometer::{AccelBandwidth, AccelConfig, AccelFullScale, AccelOdr, HighResCutoff};
pub use attitude::Attitude;
pub use gyroscope::{GyroConfig, GyroFullScale, GyroOdr};
pub use magnetometer::{MagConfig, MagFullScale, MagMode, MagOdr, MagPerformance};
pub use sample::{AxisSample, CalibrationBias, FREE_FALL_THRESHOLD_G, RawSample};
pub use temperature::{TempConfig, temperature_to_celsius};

/// Configuration of all sensors in the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Accelerometer settings
    pub accel: AccelConfig,
    /// Gyroscope settings
    pub gyro: GyroConfig,
    /// Magnetometer settings
    pub mag: MagConfig,
    /// Temperature sensor settings
    pub temp: TempConfig,
}

impl SensorConfig {
    /// Effective accelerometer output data rate in Hz
    ///
    /// With the gyroscope enabled both sensors run from the gyroscope ODR.
    #[must_use]
    pub fn accel_sample_rate(&self) -> f32 {
        if self.gyro.enabled {
            self.gyro.odr.hz()
        } else {
            self.accel.odr.hz()
        }
    }
}

/// Source of calibrated inertial samples
///
/// Implemented by [`Lsm9ds1Driver`](crate::Lsm9ds1Driver). The acquisition loop is
/// written against this trait so another sensor model can be substituted.
pub trait MotionSensor {
    /// Error type returned by sensor operations
    type Error;

    /// Whether a new accelerometer sample is ready
    ///
    /// # Errors
    ///
    /// Returns an error if the sensor cannot be queried.
    fn acceleration_available(&mut self) -> Result<bool, Self::Error>;

    /// Whether a new gyroscope sample is ready
    ///
    /// # Errors
    ///
    /// Returns an error if the sensor cannot be queried.
    fn gyroscope_available(&mut self) -> Result<bool, Self::Error>;

    /// Whether a new magnetometer sample is ready
    ///
    /// # Errors
    ///
    /// Returns an error if the sensor cannot be queried.
    fn magnetic_field_available(&mut self) -> Result<bool, Self::Error>;

    /// Read acceleration in g
    ///
    /// # Errors
    ///
    /// Returns an error if the sample cannot be read.
    fn read_acceleration(&mut self) -> Result<AxisSample, Self::Error>;

    /// Read angular rate in degrees per second
    ///
    /// # Errors
    ///
    /// Returns an error if the sample cannot be read.
    fn read_gyroscope(&mut self) -> Result<AxisSample, Self::Error>;

    /// Read magnetic field in gauss
    ///
    /// # Errors
    ///
    /// Returns an error if the sample cannot be read.
    fn read_magnetic_field(&mut self) -> Result<AxisSample, Self::Error>;

    /// Accelerometer sample rate in Hz
    fn acceleration_sample_rate(&self) -> f32;

    /// Gyroscope sample rate in Hz
    fn gyroscope_sample_rate(&self) -> f32;

    /// Magnetometer sample rate in Hz
    fn magnetic_field_sample_rate(&self) -> f32;
}
