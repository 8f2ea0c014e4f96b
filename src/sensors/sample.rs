//! Sample and bias types shared by the three sensors

/// Vector magnitude at or below which the sensor is considered in free fall, in g
pub const FREE_FALL_THRESHOLD_G: f32 = 0.5;

/// Raw 16-bit sample of one sensor (X, Y, Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// X-axis (raw)
    pub x: i16,
    /// Y-axis (raw)
    pub y: i16,
    /// Z-axis (raw)
    pub z: i16,
}

impl RawSample {
    /// Assemble a sample from six output register bytes (X_L, X_H, Y_L, ...)
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    /// Subtract a per-axis bias, saturating at the i16 range
    #[must_use]
    pub const fn saturating_sub(self, bias: [i16; 3]) -> Self {
        Self {
            x: self.x.saturating_sub(bias[0]),
            y: self.y.saturating_sub(bias[1]),
            z: self.z.saturating_sub(bias[2]),
        }
    }
}

/// Sample in physical units: g, degrees per second or gauss
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    /// X-axis value
    pub x: f32,
    /// Y-axis value
    pub y: f32,
    /// Z-axis value
    pub z: f32,
}

impl AxisSample {
    /// Create a sample from its three components
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert a raw sample with a resolution in units per LSB
    #[must_use]
    pub fn from_raw(raw: RawSample, resolution: f32) -> Self {
        Self {
            x: f32::from(raw.x) * resolution,
            y: f32::from(raw.y) * resolution,
            z: f32::from(raw.z) * resolution,
        }
    }

    /// Euclidean norm of the vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Whether an acceleration sample indicates free fall
    #[must_use]
    pub fn is_free_fall(&self) -> bool {
        self.magnitude() <= FREE_FALL_THRESHOLD_G
    }
}

/// Zero-rate/zero-g bias computed by [`calibrate`](crate::Lsm9ds1Driver::calibrate)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationBias {
    /// Accelerometer bias in counts (X, Y, Z)
    pub accel_raw: [i16; 3],
    /// Gyroscope bias in counts (X, Y, Z)
    pub gyro_raw: [i16; 3],
    /// Accelerometer bias in g
    pub accel: [f32; 3],
    /// Gyroscope bias in degrees per second
    pub gyro: [f32; 3],
}
