//! Event capture
//!
//! One [`RingBuffer`] per axis keeps the most recent accelerometer and gyroscope
//! history. The [`CaptureStateMachine`] watches the acceleration magnitude and,
//! once it crosses the threshold, keeps recording a fixed number of extra samples
//! before freezing the buffers into a [`SignalWindow`].
//!
//! # Example
//!
//! ```ignore
//! # use fall_detection::{CaptureConfig, CaptureStateMachine};
//! let mut capture = CaptureStateMachine::<120>::new(CaptureConfig::default())?;
//! loop {
//!     let gyro = imu.read_gyroscope()?;
//!     let accel = imu.read_acceleration()?;
//!     if let Some(window) = capture.step(accel, gyro) {
//!         let features = fall_detection::extract_features(&window);
//!     }
//! }
//! ```

pub mod ring_buffer;
pub mod window;

pub use ring_buffer::RingBuffer;
pub use window::{CHANNEL_COUNT, Channel, SignalWindow};

use crate::sensors::AxisSample;

/// Default acceleration magnitude that starts a capture, in g
pub const DEFAULT_THRESHOLD_G: f32 = 1.5022;

/// Default window length in samples
pub const DEFAULT_WINDOW_LEN: usize = 120;

/// Default number of samples recorded after the threshold crossing
pub const DEFAULT_EXTRA_SAMPLES: usize = 60;

/// Capture settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CaptureConfig {
    /// Acceleration magnitude (g) at or above which an event is captured
    pub threshold: f32,
    /// Samples per channel in a captured window
    pub window_len: usize,
    /// Samples recorded after the crossing before the window is frozen
    ///
    /// Must be smaller than `window_len` so the crossing stays in the window.
    pub extra_samples: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_G,
            window_len: DEFAULT_WINDOW_LEN,
            extra_samples: DEFAULT_EXTRA_SAMPLES,
        }
    }
}

/// Rejected [`CaptureConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureConfigError {
    /// Threshold is not a positive finite number
    InvalidThreshold,
    /// Window length is zero or exceeds the buffer capacity
    InvalidWindowLength,
    /// Extra sample count is not smaller than the window length
    TooManyExtraSamples,
}

impl CaptureConfig {
    /// Check the configuration against a buffer capacity of `capacity` samples
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self, capacity: usize) -> Result<(), CaptureConfigError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(CaptureConfigError::InvalidThreshold);
        }
        if self.window_len == 0 || self.window_len > capacity {
            return Err(CaptureConfigError::InvalidWindowLength);
        }
        if self.extra_samples >= self.window_len {
            return Err(CaptureConfigError::TooManyExtraSamples);
        }
        Ok(())
    }
}

/// Capture progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureState {
    /// Sliding collection, waiting for a threshold crossing
    Filling,
    /// The last sample crossed the threshold
    ThresholdExceeded,
    /// Recording the samples that follow a crossing
    ExtraCapture,
    /// A window was emitted; the next sample restarts collection
    Ready,
}

/// Threshold-triggered capture over six axis buffers of up to `N` samples
///
/// Once a crossing is seen the machine always runs to `Ready` and emits exactly one
/// window; there is no way back to `Filling` in between. The threshold is only
/// evaluated when the buffers hold a full window, so every emitted window has
/// `window_len` samples.
pub struct CaptureStateMachine<const N: usize> {
    config: CaptureConfig,
    buffers: [RingBuffer<N>; CHANNEL_COUNT],
    state: CaptureState,
    extra_captured: usize,
}

impl<const N: usize> CaptureStateMachine<N> {
    /// Create a state machine in `Filling` with empty buffers
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid for a capacity of `N`.
    pub fn new(config: CaptureConfig) -> Result<Self, CaptureConfigError> {
        config.validate(N)?;
        let buffer = RingBuffer::with_capacity(config.window_len)
            .ok_or(CaptureConfigError::InvalidWindowLength)?;
        Ok(Self {
            config,
            buffers: core::array::from_fn(|_| buffer.clone()),
            state: CaptureState::Filling,
            extra_captured: 0,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Samples currently buffered per channel
    #[must_use]
    pub const fn buffered(&self) -> usize {
        self.buffers[0].len()
    }

    /// Samples recorded since the last threshold crossing
    #[must_use]
    pub const fn extra_captured(&self) -> usize {
        self.extra_captured
    }

    /// Buffer of one channel
    #[must_use]
    pub fn buffer(&self, channel: Channel) -> &RingBuffer<N> {
        &self.buffers[channel.index()]
    }

    /// Empty all buffers and return to `Filling`
    pub fn reset(&mut self) {
        for buffer in &mut self.buffers {
            buffer.reset();
        }
        self.state = CaptureState::Filling;
        self.extra_captured = 0;
    }

    /// Feed one accelerometer + gyroscope sample pair
    ///
    /// Returns the frozen window when this sample completes a capture. The sample
    /// following a completed capture starts a fresh history.
    pub fn step(&mut self, accel: AxisSample, gyro: AxisSample) -> Option<SignalWindow<N>> {
        if self.state == CaptureState::Ready {
            self.reset();
        }

        self.push(accel, gyro);

        match self.state {
            CaptureState::Filling => {
                let magnitude = accel.magnitude();
                if self.buffers[0].is_full() && magnitude >= self.config.threshold {
                    #[cfg(feature = "defmt")]
                    defmt::info!("threshold crossed: {} g", magnitude);

                    self.state = CaptureState::ThresholdExceeded;
                    self.extra_captured = 0;
                    if self.config.extra_samples == 0 {
                        return self.freeze();
                    }
                }
                None
            }
            CaptureState::ThresholdExceeded | CaptureState::ExtraCapture => {
                self.state = CaptureState::ExtraCapture;
                self.extra_captured += 1;
                if self.extra_captured >= self.config.extra_samples {
                    self.freeze()
                } else {
                    None
                }
            }
            // Left by the reset above
            CaptureState::Ready => None,
        }
    }

    fn push(&mut self, accel: AxisSample, gyro: AxisSample) {
        let values = [accel.x, accel.y, accel.z, gyro.x, gyro.y, gyro.z];
        for (buffer, value) in self.buffers.iter_mut().zip(values) {
            buffer.push(value);
        }
    }

    fn freeze(&mut self) -> Option<SignalWindow<N>> {
        let mut channels = [[0.0; N]; CHANNEL_COUNT];
        let mut len = 0;
        for (channel, buffer) in channels.iter_mut().zip(&self.buffers) {
            len = buffer.copy_to(channel);
        }
        self.state = CaptureState::Ready;

        #[cfg(feature = "defmt")]
        defmt::info!("window captured: {} samples", len);

        SignalWindow::from_channels(channels, len)
    }
}
