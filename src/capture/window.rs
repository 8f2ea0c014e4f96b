//! Frozen six-axis signal window

use crate::sensors::AxisSample;

/// Number of channels in a signal window
pub const CHANNEL_COUNT: usize = 6;

/// Channel of a signal window, in storage and feature order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Acceleration X (g)
    AccX = 0,
    /// Acceleration Y (g)
    AccY = 1,
    /// Acceleration Z (g)
    AccZ = 2,
    /// Angular rate X (dps)
    GyroX = 3,
    /// Angular rate Y (dps)
    GyroY = 4,
    /// Angular rate Z (dps)
    GyroZ = 5,
}

impl Channel {
    /// All channels in order
    pub const ALL: [Self; CHANNEL_COUNT] = [
        Self::AccX,
        Self::AccY,
        Self::AccZ,
        Self::GyroX,
        Self::GyroY,
        Self::GyroZ,
    ];

    /// Position of the channel in a window
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Six equal-length sample arrays captured around one event
///
/// Index `i` refers to the same instant on every channel. The length is between 1
/// and `N`; slots beyond it are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalWindow<const N: usize> {
    channels: [[f32; N]; CHANNEL_COUNT],
    len: usize,
}

impl<const N: usize> SignalWindow<N> {
    /// Build a window from full-size channel arrays and a logical length
    ///
    /// Returns `None` if `len` is zero or larger than `N`.
    #[must_use]
    pub fn from_channels(channels: [[f32; N]; CHANNEL_COUNT], len: usize) -> Option<Self> {
        if len == 0 || len > N {
            return None;
        }
        let mut channels = channels;
        for channel in &mut channels {
            channel[len..].fill(0.0);
        }
        Some(Self { channels, len })
    }

    /// Build a window by copying six slices
    ///
    /// Returns `None` if the slices differ in length, are empty, or exceed `N`.
    #[must_use]
    pub fn from_slices(
        acc_x: &[f32],
        acc_y: &[f32],
        acc_z: &[f32],
        gyro_x: &[f32],
        gyro_y: &[f32],
        gyro_z: &[f32],
    ) -> Option<Self> {
        let sources = [acc_x, acc_y, acc_z, gyro_x, gyro_y, gyro_z];
        let len = acc_x.len();
        if sources.iter().any(|s| s.len() != len) {
            return None;
        }
        if len == 0 || len > N {
            return None;
        }
        let mut channels = [[0.0; N]; CHANNEL_COUNT];
        for (channel, source) in channels.iter_mut().zip(sources) {
            channel[..len].copy_from_slice(source);
        }
        Some(Self { channels, len })
    }

    /// Build a window from paired accelerometer and gyroscope samples
    ///
    /// Returns `None` if there are no samples or more than `N`.
    #[must_use]
    pub fn from_samples(samples: &[(AxisSample, AxisSample)]) -> Option<Self> {
        if samples.is_empty() || samples.len() > N {
            return None;
        }
        let mut channels = [[0.0; N]; CHANNEL_COUNT];
        for (i, (accel, gyro)) in samples.iter().enumerate() {
            channels[0][i] = accel.x;
            channels[1][i] = accel.y;
            channels[2][i] = accel.z;
            channels[3][i] = gyro.x;
            channels[4][i] = gyro.y;
            channels[5][i] = gyro.z;
        }
        Some(Self {
            channels,
            len: samples.len(),
        })
    }

    /// Number of samples per channel
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; a window holds at least one sample
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Samples of one channel
    #[must_use]
    pub fn channel(&self, channel: Channel) -> &[f32] {
        &self.channels[channel.index()][..self.len]
    }

    /// Acceleration X samples
    #[must_use]
    pub fn acc_x(&self) -> &[f32] {
        self.channel(Channel::AccX)
    }

    /// Acceleration Y samples
    #[must_use]
    pub fn acc_y(&self) -> &[f32] {
        self.channel(Channel::AccY)
    }

    /// Acceleration Z samples
    #[must_use]
    pub fn acc_z(&self) -> &[f32] {
        self.channel(Channel::AccZ)
    }

    /// Angular rate X samples
    #[must_use]
    pub fn gyro_x(&self) -> &[f32] {
        self.channel(Channel::GyroX)
    }

    /// Angular rate Y samples
    #[must_use]
    pub fn gyro_y(&self) -> &[f32] {
        self.channel(Channel::GyroY)
    }

    /// Angular rate Z samples
    #[must_use]
    pub fn gyro_z(&self) -> &[f32] {
        self.channel(Channel::GyroZ)
    }

    /// Accelerometer and gyroscope sample at one instant
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<(AxisSample, AxisSample)> {
        if index >= self.len {
            return None;
        }
        let at = |c: Channel| self.channels[c.index()][index];
        Some((
            AxisSample::new(at(Channel::AccX), at(Channel::AccY), at(Channel::AccZ)),
            AxisSample::new(at(Channel::GyroX), at(Channel::GyroY), at(Channel::GyroZ)),
        ))
    }
}
