//! Feature extraction
//!
//! Reduces a [`SignalWindow`] to the 46-value [`FeatureVector`] the fall classifier
//! was trained on. The slot layout is fixed:
//!
//! | Slots | Content |
//! |-------|---------|
//! | 0-5   | population standard deviation per channel |
//! | 6-11  | mean per channel |
//! | 12-17 | maximum per channel |
//! | 18-23 | minimum per channel |
//! | 24-29 | peak-to-peak per channel |
//! | 30-35 | mean of the top-3 local maxima / minima, acc x, y, z interleaved |
//! | 36-37 | max / min acceleration vector magnitude |
//! | 38-39 | max 20-sample std magnitude over x/z and over x/y/z |
//! | 40-45 | max absolute first difference per channel |
//!
//! Channels are always ordered acc x, y, z then gyro x, y, z.

use crate::capture::{CHANNEL_COUNT, Channel, SignalWindow};

/// Number of values in a feature vector
pub const FEATURE_COUNT: usize = 46;

/// Width of the rolling standard deviation window
pub const STD_WINDOW: usize = 20;

/// First slot of each feature group
pub mod slot {
    /// Standard deviation, 6 slots
    pub const STD: usize = 0;
    /// Mean, 6 slots
    pub const MEAN: usize = 6;
    /// Maximum, 6 slots
    pub const MAX: usize = 12;
    /// Minimum, 6 slots
    pub const MIN: usize = 18;
    /// Peak-to-peak, 6 slots
    pub const PEAK_TO_PEAK: usize = 24;
    /// Top-3 peak means, max/min interleaved per accelerometer axis, 6 slots
    pub const PEAK_MEANS: usize = 30;
    /// Maximum acceleration magnitude
    pub const MAGNITUDE_MAX: usize = 36;
    /// Minimum acceleration magnitude
    pub const MAGNITUDE_MIN: usize = 37;
    /// Maximum windowed std magnitude over x and z
    pub const WINDOWED_STD_XZ: usize = 38;
    /// Maximum windowed std magnitude over x, y and z
    pub const WINDOWED_STD_XYZ: usize = 39;
    /// Maximum slope, 6 slots
    pub const MAX_SLOPE: usize = 40;
}

/// 46 features describing one signal window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeatureVector(pub [f32; FEATURE_COUNT]);

impl FeatureVector {
    /// All features in slot order
    #[must_use]
    pub const fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    /// Population standard deviation of a channel
    #[must_use]
    pub const fn std_dev(&self, channel: Channel) -> f32 {
        self.0[slot::STD + channel.index()]
    }

    /// Mean of a channel
    #[must_use]
    pub const fn mean(&self, channel: Channel) -> f32 {
        self.0[slot::MEAN + channel.index()]
    }

    /// Maximum of a channel
    #[must_use]
    pub const fn max(&self, channel: Channel) -> f32 {
        self.0[slot::MAX + channel.index()]
    }

    /// Minimum of a channel
    #[must_use]
    pub const fn min(&self, channel: Channel) -> f32 {
        self.0[slot::MIN + channel.index()]
    }

    /// Peak-to-peak amplitude of a channel
    #[must_use]
    pub const fn peak_to_peak(&self, channel: Channel) -> f32 {
        self.0[slot::PEAK_TO_PEAK + channel.index()]
    }

    /// Mean of the three largest local maxima (accelerometer channels only)
    #[must_use]
    pub const fn max_peak_mean(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::AccX | Channel::AccY | Channel::AccZ => {
                Some(self.0[slot::PEAK_MEANS + 2 * channel.index()])
            }
            _ => None,
        }
    }

    /// Mean of the three smallest local minima (accelerometer channels only)
    #[must_use]
    pub const fn min_peak_mean(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::AccX | Channel::AccY | Channel::AccZ => {
                Some(self.0[slot::PEAK_MEANS + 2 * channel.index() + 1])
            }
            _ => None,
        }
    }

    /// Largest acceleration vector magnitude
    #[must_use]
    pub const fn max_magnitude(&self) -> f32 {
        self.0[slot::MAGNITUDE_MAX]
    }

    /// Smallest acceleration vector magnitude
    #[must_use]
    pub const fn min_magnitude(&self) -> f32 {
        self.0[slot::MAGNITUDE_MIN]
    }

    /// Largest rolling std magnitude over acceleration x and z
    #[must_use]
    pub const fn windowed_std_xz(&self) -> f32 {
        self.0[slot::WINDOWED_STD_XZ]
    }

    /// Largest rolling std magnitude over acceleration x, y and z
    #[must_use]
    pub const fn windowed_std_xyz(&self) -> f32 {
        self.0[slot::WINDOWED_STD_XYZ]
    }

    /// Largest absolute difference between consecutive samples of a channel
    #[must_use]
    pub const fn max_slope(&self, channel: Channel) -> f32 {
        self.0[slot::MAX_SLOPE + channel.index()]
    }
}

/// Running statistics of one channel
#[derive(Debug, Clone, Copy)]
struct ChannelStats {
    max: f32,
    min: f32,
    sum: f32,
    max_slope: f32,
}

impl ChannelStats {
    fn seed(first: f32) -> Self {
        Self {
            max: first,
            min: first,
            sum: first,
            max_slope: 0.0,
        }
    }

    fn update(&mut self, previous: f32, value: f32) {
        self.max = self.max.max(value);
        self.min = self.min.min(value);
        self.sum += value;
        self.max_slope = self.max_slope.max(libm::fabsf(previous - value));
    }
}

/// Three best extrema of one kind, best first
///
/// Ranks start as `[first, 0, 0]`, except the y-axis minima which start with the
/// first sample in every rank. Windows with fewer than three extrema keep those
/// seeds in their mean; the classifier was trained on values computed this way.
#[derive(Debug, Clone, Copy)]
struct TopThree([f32; 3]);

impl TopThree {
    const fn seeded(first: f32) -> Self {
        Self([first, 0.0, 0.0])
    }

    fn insert_max(&mut self, value: f32) {
        let r = &mut self.0;
        if r[0] <= value {
            *r = [value, r[0], r[1]];
        } else if r[1] <= value {
            *r = [r[0], value, r[1]];
        } else if r[2] <= value {
            r[2] = value;
        }
    }

    fn insert_min(&mut self, value: f32) {
        let r = &mut self.0;
        if r[0] >= value {
            *r = [value, r[0], r[1]];
        } else if r[1] >= value {
            *r = [r[0], value, r[1]];
        } else if r[2] >= value {
            r[2] = value;
        }
    }

    fn mean(&self) -> f32 {
        (self.0[0] + self.0[1] + self.0[2]) / 3.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Max,
    Min,
}

/// Classify `s[i]` as a local extremum
///
/// Requires `1 <= i < s.len() - 1`. A plateau whose next sample keeps moving in the
/// direction of approach is a shoulder, not an extremum.
fn local_extremum(s: &[f32], i: usize) -> Option<Extremum> {
    let lookahead = i + 2 < s.len();
    if s[i - 1] < s[i] && s[i] >= s[i + 1] {
        let shoulder = lookahead && s[i] == s[i + 1] && s[i + 2] > s[i + 1];
        (!shoulder).then_some(Extremum::Max)
    } else if s[i - 1] > s[i] && s[i] <= s[i + 1] {
        let shoulder = lookahead && s[i] == s[i + 1] && s[i + 2] < s[i + 1];
        (!shoulder).then_some(Extremum::Min)
    } else {
        None
    }
}

fn magnitude(x: f32, y: f32, z: f32) -> f32 {
    libm::sqrtf(x * x + y * y + z * z)
}

/// Population variance of `s` around its own mean
#[allow(clippy::cast_precision_loss)]
fn variance(s: &[f32]) -> f32 {
    let n = s.len() as f32;
    let mean = s.iter().sum::<f32>() / n;
    s.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n
}

/// Compute the feature vector of a window
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn extract_features<const N: usize>(window: &SignalWindow<N>) -> FeatureVector {
    let len = window.len();
    let channels: [&[f32]; CHANNEL_COUNT] = Channel::ALL.map(|c| window.channel(c));
    let (acc_x, acc_y, acc_z) = (channels[0], channels[1], channels[2]);

    let mut stats = channels.map(|s| ChannelStats::seed(s[0]));

    let first_magnitude = magnitude(acc_x[0], acc_y[0], acc_z[0]);
    let mut max_magnitude = first_magnitude;
    let mut min_magnitude = first_magnitude;

    let mut max_peaks = [acc_x[0], acc_y[0], acc_z[0]].map(TopThree::seeded);
    let mut min_peaks = max_peaks;
    min_peaks[1] = TopThree([acc_y[0]; 3]);

    for i in 1..len {
        for (stat, s) in stats.iter_mut().zip(channels) {
            stat.update(s[i - 1], s[i]);
        }

        let m = magnitude(acc_x[i], acc_y[i], acc_z[i]);
        max_magnitude = max_magnitude.max(m);
        min_magnitude = min_magnitude.min(m);

        if i + 1 < len {
            for (axis, s) in [acc_x, acc_y, acc_z].into_iter().enumerate() {
                match local_extremum(s, i) {
                    Some(Extremum::Max) => max_peaks[axis].insert_max(s[i]),
                    Some(Extremum::Min) => min_peaks[axis].insert_min(s[i]),
                    None => {}
                }
            }
        }
    }

    let n = len as f32;
    let means = stats.map(|s| s.sum / n);

    // Rolling std over every full window; the whole-signal residuals are folded in
    // one sample per window start and the remainder afterwards.
    let mut max_std_xz = 0.0f32;
    let mut max_std_xyz = 0.0f32;
    let mut sum_squares = [0.0f32; CHANNEL_COUNT];
    let mut folded = 0;

    let fold = |index: usize, sums: &mut [f32; CHANNEL_COUNT]| {
        for ((sum, s), mean) in sums.iter_mut().zip(channels).zip(means) {
            let residual = s[index] - mean;
            *sum += residual * residual;
        }
    };

    if len >= STD_WINDOW {
        for start in 0..=len - STD_WINDOW {
            let end = start + STD_WINDOW;
            let var_x = variance(&acc_x[start..end]);
            let var_y = variance(&acc_y[start..end]);
            let var_z = variance(&acc_z[start..end]);
            max_std_xz = max_std_xz.max(libm::sqrtf(var_x + var_z));
            max_std_xyz = max_std_xyz.max(libm::sqrtf(var_x + var_y + var_z));

            fold(start, &mut sum_squares);
            folded = start + 1;
        }
    }
    for index in folded..len {
        fold(index, &mut sum_squares);
    }

    let mut features = [0.0f32; FEATURE_COUNT];
    for c in 0..CHANNEL_COUNT {
        let stat = stats[c];
        features[slot::STD + c] = libm::sqrtf(sum_squares[c] / n);
        features[slot::MEAN + c] = means[c];
        features[slot::MAX + c] = stat.max;
        features[slot::MIN + c] = stat.min;
        features[slot::PEAK_TO_PEAK + c] = stat.max - stat.min;
        features[slot::MAX_SLOPE + c] = stat.max_slope;
    }
    for axis in 0..3 {
        features[slot::PEAK_MEANS + 2 * axis] = max_peaks[axis].mean();
        features[slot::PEAK_MEANS + 2 * axis + 1] = min_peaks[axis].mean();
    }
    features[slot::MAGNITUDE_MAX] = max_magnitude;
    features[slot::MAGNITUDE_MIN] = min_magnitude;
    features[slot::WINDOWED_STD_XZ] = max_std_xz;
    features[slot::WINDOWED_STD_XYZ] = max_std_xyz;

    FeatureVector(features)
}
