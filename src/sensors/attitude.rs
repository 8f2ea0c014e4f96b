//! Roll, pitch and magnetic heading from a single accelerometer and magnetometer sample

use core::f32::consts::PI;

use super::AxisSample;

/// Orientation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attitude {
    /// Rotation about the X axis
    pub roll: f32,
    /// Rotation about the Y axis
    pub pitch: f32,
    /// Heading relative to true north, in (-180, 180]
    pub heading: f32,
}

impl Attitude {
    /// Compute attitude from a gravity reading and a magnetic field reading
    ///
    /// The LSM9DS1 magnetometer X/Y axes are swapped and inverted relative to the
    /// accelerometer, which is compensated here. `declination` is the local magnetic
    /// declination in degrees (east positive).
    #[must_use]
    pub fn from_samples(accel: &AxisSample, mag: &AxisSample, declination: f32) -> Self {
        let roll = libm::atan2f(accel.y, accel.z);
        let pitch = libm::atan2f(
            -accel.x,
            libm::sqrtf(accel.y * accel.y + accel.z * accel.z),
        );

        // Align magnetometer axes with the accelerometer frame
        let mx = -mag.y;
        let my = -mag.x;

        let mut heading = if my == 0.0 {
            if mx < 0.0 { PI } else { 0.0 }
        } else {
            libm::atan2f(mx, my)
        };

        heading -= declination.to_radians();
        if heading > PI {
            heading -= 2.0 * PI;
        } else if heading < -PI {
            heading += 2.0 * PI;
        }

        Self {
            roll: roll.to_degrees(),
            pitch: pitch.to_degrees(),
            heading: heading.to_degrees(),
        }
    }
}
