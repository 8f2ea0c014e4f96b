//! Magnetometer sensor types and configuration
//!
//! The LSM9DS1 magnetometer is a separate device on the bus with its own address
//! and control registers.

/// Magnetometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagFullScale {
    /// ±4 gauss
    Gauss4 = 0,
    /// ±8 gauss
    Gauss8 = 1,
    /// ±12 gauss
    Gauss12 = 2,
    /// ±16 gauss
    Gauss16 = 3,
}

impl MagFullScale {
    /// Get the resolution in gauss per LSB
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Gauss4 => 0.000_14,
            Self::Gauss8 => 0.000_29,
            Self::Gauss12 => 0.000_43,
            Self::Gauss16 => 0.000_58,
        }
    }
}

/// Magnetometer output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOdr {
    /// 0.625 Hz
    Hz0p625 = 0,
    /// 1.25 Hz
    Hz1p25 = 1,
    /// 2.5 Hz
    Hz2p5 = 2,
    /// 5 Hz
    Hz5 = 3,
    /// 10 Hz
    Hz10 = 4,
    /// 20 Hz
    Hz20 = 5,
    /// 40 Hz
    Hz40 = 6,
    /// 80 Hz
    Hz80 = 7,
}

impl MagOdr {
    /// Output data rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz0p625 => 0.625,
            Self::Hz1p25 => 1.25,
            Self::Hz2p5 => 2.5,
            Self::Hz5 => 5.0,
            Self::Hz10 => 10.0,
            Self::Hz20 => 20.0,
            Self::Hz40 => 40.0,
            Self::Hz80 => 80.0,
        }
    }
}

/// Magnetometer axis performance mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagPerformance {
    /// Low-power mode
    LowPower = 0,
    /// Medium performance
    Medium = 1,
    /// High performance
    High = 2,
    /// Ultra-high performance
    UltraHigh = 3,
}

/// Magnetometer operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagMode {
    /// Continuous conversion
    Continuous = 0,
    /// Single conversion
    Single = 1,
    /// Power-down
    PowerDown = 3,
}

/// Magnetometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    /// Magnetometer enabled (if false the device is put in power-down)
    pub enabled: bool,
    /// Full-scale range
    pub full_scale: MagFullScale,
    /// Output data rate
    pub odr: MagOdr,
    /// Temperature compensation
    pub temp_compensation: bool,
    /// X/Y axes performance
    pub xy_performance: MagPerformance,
    /// Z-axis performance
    pub z_performance: MagPerformance,
    /// Low-power mode
    pub low_power: bool,
    /// Operating mode
    pub mode: MagMode,
}

impl Default for MagConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            full_scale: MagFullScale::Gauss4,
            odr: MagOdr::Hz80,
            temp_compensation: true,
            xy_performance: MagPerformance::Medium,
            z_performance: MagPerformance::Medium,
            low_power: false,
            mode: MagMode::Continuous,
        }
    }
}

impl MagConfig {
    /// Operating mode actually programmed, taking `enabled` into account
    #[must_use]
    pub const fn effective_mode(&self) -> MagMode {
        if self.enabled {
            self.mode
        } else {
            MagMode::PowerDown
        }
    }
}
