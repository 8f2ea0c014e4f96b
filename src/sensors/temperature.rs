//! Die temperature sensor

/// Temperature output at 0 LSB, in °C
pub const TEMPERATURE_OFFSET_C: f32 = 25.0;

/// Temperature sensitivity in LSB/°C
pub const TEMPERATURE_SENSITIVITY: f32 = 16.0;

/// Temperature sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempConfig {
    /// Temperature readings enabled
    pub enabled: bool,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Convert a raw `OUT_TEMP` value to degrees Celsius
#[must_use]
pub fn temperature_to_celsius(raw: i16) -> f32 {
    TEMPERATURE_OFFSET_C + f32::from(raw) / TEMPERATURE_SENSITIVITY
}
