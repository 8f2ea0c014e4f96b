//! Gyroscope sensor types and configuration

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±245 dps (most sensitive)
    Dps245,
    /// ±500 dps
    Dps500,
    /// ±2000 dps (least sensitive)
    Dps2000,
}

impl GyroFullScale {
    /// Value of the `FS_G` field in `CTRL_REG1_G`
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Dps245 => 0b00,
            Self::Dps500 => 0b01,
            Self::Dps2000 => 0b11,
        }
    }

    /// Get the resolution in dps per LSB
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps245 => 0.008_75,
            Self::Dps500 => 0.017_5,
            Self::Dps2000 => 0.07,
        }
    }
}

/// Gyroscope output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    /// Power-down
    PowerDown = 0,
    /// 14.9 Hz
    Hz14p9 = 1,
    /// 59.5 Hz
    Hz59p5 = 2,
    /// 119 Hz
    Hz119 = 3,
    /// 238 Hz
    Hz238 = 4,
    /// 476 Hz
    Hz476 = 5,
    /// 952 Hz
    Hz952 = 6,
}

impl GyroOdr {
    /// Output data rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::PowerDown => 0.0,
            Self::Hz14p9 => 14.9,
            Self::Hz59p5 => 59.5,
            Self::Hz119 => 119.0,
            Self::Hz238 => 238.0,
            Self::Hz476 => 476.0,
            Self::Hz952 => 952.0,
        }
    }
}

/// Largest valid `BW_G` code
pub const GYRO_BANDWIDTH_MAX: u8 = 3;
/// Largest valid high-pass cutoff code
pub const GYRO_HPF_CUTOFF_MAX: u8 = 9;
/// Largest valid orientation code
pub const GYRO_ORIENTATION_MAX: u8 = 7;

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct GyroConfig {
    /// Gyroscope enabled (if false the ODR field is left at power-down)
    pub enabled: bool,
    /// X-axis output enabled
    pub enable_x: bool,
    /// Y-axis output enabled
    pub enable_y: bool,
    /// Z-axis output enabled
    pub enable_z: bool,
    /// Full-scale range
    pub full_scale: GyroFullScale,
    /// Output data rate
    pub odr: GyroOdr,
    /// Bandwidth code (0-3, cutoff depends on the ODR)
    pub bandwidth: u8,
    /// Low-power mode
    pub low_power: bool,
    /// High-pass filter cutoff code (0-9), `None` disables the filter
    pub hpf_cutoff: Option<u8>,
    /// Flip the X-axis sign
    pub flip_x: bool,
    /// Flip the Y-axis sign
    pub flip_y: bool,
    /// Flip the Z-axis sign
    pub flip_z: bool,
    /// Directional orientation code (0-7)
    pub orientation: u8,
    /// Latch interrupt requests until the source register is read
    pub latch_interrupt: bool,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_x: true,
            enable_y: true,
            enable_z: true,
            full_scale: GyroFullScale::Dps2000,
            odr: GyroOdr::Hz119,
            bandwidth: 3,
            low_power: false,
            hpf_cutoff: None,
            flip_x: false,
            flip_y: false,
            flip_z: false,
            orientation: 0,
            latch_interrupt: true,
        }
    }
}

impl GyroConfig {
    /// Check that the numeric codes are within their register fields
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.bandwidth <= GYRO_BANDWIDTH_MAX
            && self.orientation <= GYRO_ORIENTATION_MAX
            && self.hpf_cutoff.is_none_or(|c| c <= GYRO_HPF_CUTOFF_MAX)
    }
}
