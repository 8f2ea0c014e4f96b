//! Accelerometer sensor types and configuration
//!
//! Provides types and enums for the LSM9DS1's 3-axis accelerometer.

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2,
    /// ±4g range
    G4,
    /// ±8g range
    G8,
    /// ±16g range (least sensitive, most range)
    G16,
}

impl AccelFullScale {
    /// Value of the `FS_XL` field in `CTRL_REG6_XL`
    ///
    /// The encoding is not monotonic: ±16g sits between ±2g and ±4g.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G16 => 0b01,
            Self::G4 => 0b10,
            Self::G8 => 0b11,
        }
    }

    /// Get the resolution in g per LSB
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 0.000_061,
            Self::G4 => 0.000_122,
            Self::G8 => 0.000_244,
            Self::G16 => 0.000_732,
        }
    }
}

/// Accelerometer output data rate (accelerometer-only operation)
///
/// While the gyroscope is enabled the accelerometer runs at the gyroscope rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOdr {
    /// Power-down
    PowerDown = 0,
    /// 10 Hz
    Hz10 = 1,
    /// 50 Hz
    Hz50 = 2,
    /// 119 Hz
    Hz119 = 3,
    /// 238 Hz
    Hz238 = 4,
    /// 476 Hz
    Hz476 = 5,
    /// 952 Hz
    Hz952 = 6,
}

impl AccelOdr {
    /// Output data rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::PowerDown => 0.0,
            Self::Hz10 => 10.0,
            Self::Hz50 => 50.0,
            Self::Hz119 => 119.0,
            Self::Hz238 => 238.0,
            Self::Hz476 => 476.0,
            Self::Hz952 => 952.0,
        }
    }
}

/// Accelerometer anti-aliasing filter bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelBandwidth {
    /// 408 Hz
    Hz408 = 0,
    /// 211 Hz
    Hz211 = 1,
    /// 105 Hz
    Hz105 = 2,
    /// 50 Hz
    Hz50 = 3,
}

/// High-resolution mode cutoff, as a fraction of the output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighResCutoff {
    /// ODR / 50
    OdrDiv50 = 0,
    /// ODR / 100
    OdrDiv100 = 1,
    /// ODR / 9
    OdrDiv9 = 2,
    /// ODR / 400
    OdrDiv400 = 3,
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct AccelConfig {
    /// Accelerometer enabled (if false the ODR field is left at power-down)
    pub enabled: bool,
    /// X-axis output enabled
    pub enable_x: bool,
    /// Y-axis output enabled
    pub enable_y: bool,
    /// Z-axis output enabled
    pub enable_z: bool,
    /// Full-scale range
    pub full_scale: AccelFullScale,
    /// Output data rate
    pub odr: AccelOdr,
    /// Explicit anti-aliasing bandwidth (`None` derives it from the ODR)
    pub bandwidth: Option<AccelBandwidth>,
    /// High-resolution mode cutoff (`None` leaves high-resolution mode off)
    pub high_resolution: Option<HighResCutoff>,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_x: true,
            enable_y: true,
            enable_z: true,
            full_scale: AccelFullScale::G2,
            odr: AccelOdr::Hz10,
            bandwidth: None,
            high_resolution: None,
        }
    }
}
