//! FIFO (First In First Out) buffer management
//!
//! The LSM9DS1 accelerometer/gyroscope device has a 32-slot FIFO. Each slot holds one
//! gyroscope and one accelerometer sample, read back through the normal output
//! registers. The driver uses it two ways:
//! - Continuous mode, where `FIFO_SRC` reports whether unread samples are queued
//! - Calibration, where the FIFO fills to its threshold and is then drained
//!
//! # Example
//!
//! ```ignore
//! # use fall_detection::{Lsm9ds1Driver, FifoMode};
//! imu.enable_fifo(true)?;
//! imu.set_fifo(FifoMode::Fifo, 0x1F)?;
//!
//! let status = imu.fifo_status()?;
//! if status.threshold_reached {
//!     for _ in 0..status.samples {
//!         let gyro = imu.read_gyro()?;
//!         let accel = imu.read_accel()?;
//!     }
//! }
//! ```

/// Number of slots in the FIFO
pub const FIFO_DEPTH: u8 = 32;

/// Largest value accepted by the `FTH` threshold field
pub const FIFO_MAX_THRESHOLD: u8 = FIFO_DEPTH - 1;

/// FIFO operating mode (`FMODE` field of `FIFO_CTRL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled, output registers always hold the latest sample
    Bypass = 0,
    /// Fill until full, then stop collecting
    Fifo = 1,
    /// Continuous until trigger, then FIFO mode
    ContinuousToFifo = 3,
    /// Bypass until trigger, then continuous mode
    BypassToContinuous = 4,
    /// Overwrite the oldest sample when full
    Continuous = 6,
}

impl FifoMode {
    /// Value of the `FMODE` field
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Snapshot of the `FIFO_SRC` register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// Number of unread samples
    pub samples: u8,
    /// Samples were overwritten before being read
    pub overrun: bool,
    /// Fill level is at or above the threshold
    pub threshold_reached: bool,
}

impl FifoStatus {
    /// Whether at least one sample is queued
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.samples > 0
    }
}

/// Clamp a requested threshold to the `FTH` field range
#[must_use]
pub const fn clamp_threshold(threshold: u8) -> u8 {
    if threshold > FIFO_MAX_THRESHOLD {
        FIFO_MAX_THRESHOLD
    } else {
        threshold
    }
}
