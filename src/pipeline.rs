//! Acquisition to alarm
//!
//! [`FallDetector`] owns the sensor, capture state, classifier, outputs and store,
//! and advances by one sample per [`FallDetector::poll`]. On a predicted fall it
//! stores the window, then wakes the companion radio and sounds the alarm; the
//! alarm stays on until [`FallDetector::acknowledge`].

use crate::capture::{CaptureConfig, CaptureConfigError, CaptureState, CaptureStateMachine};
use crate::capture::SignalWindow;
use crate::classifier::{ClassScores, Classifier};
use crate::features::{FeatureVector, extract_features};
use crate::output::Actuators;
use crate::sensors::MotionSensor;
use crate::storage::{NAME_CAPACITY, SignalStore, StorageError, fall_name};

/// Pipeline failures
///
/// Storage and output failures while handling a fall are not errors; they are
/// reported in [`PollOutcome::Fall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PipelineError<SE, CE, AE> {
    /// Sensor read failed
    Sensor(SE),
    /// Inference failed
    Classifier(CE),
    /// Alarm or wake output failed
    Output(AE),
}

type PollError<S, C, A> = PipelineError<
    <S as MotionSensor>::Error,
    <C as Classifier>::Error,
    <A as Actuators>::Error,
>;

/// Result of one [`FallDetector::poll`], generic over the output error `AE`
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome<AE> {
    /// The sensor had no new sample
    NoData,
    /// A sample was consumed without completing a window
    Sampled(CaptureState),
    /// A window was classified as normal activity
    NotFall {
        /// Classifier output
        scores: ClassScores,
        /// Features of the window
        features: FeatureVector,
    },
    /// A window was classified as a fall
    Fall {
        /// Classifier output
        scores: ClassScores,
        /// Features of the window
        features: FeatureVector,
        /// Name the window was stored under
        name: heapless::String<NAME_CAPACITY>,
        /// Storage result; a failure does not stop the pipeline
        stored: Result<(), StorageError>,
        /// First wake or alarm failure; both outputs are always attempted
        outputs: Result<(), AE>,
    },
}

/// Fall detection loop over a sensor with windows of up to `N` samples
pub struct FallDetector<S, C, A, T, const N: usize> {
    sensor: S,
    capture: CaptureStateMachine<N>,
    classifier: C,
    actuators: A,
    store: T,
    falls: u32,
    alarm_active: bool,
}

impl<S, C, A, T, const N: usize> FallDetector<S, C, A, T, N>
where
    S: MotionSensor,
    C: Classifier,
    A: Actuators,
    T: SignalStore,
{
    /// Assemble a detector around a started sensor
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not fit a window of `N` samples.
    pub fn new(
        sensor: S,
        config: CaptureConfig,
        classifier: C,
        actuators: A,
        store: T,
    ) -> Result<Self, CaptureConfigError> {
        Ok(Self {
            sensor,
            capture: CaptureStateMachine::new(config)?,
            classifier,
            actuators,
            store,
            falls: 0,
            alarm_active: false,
        })
    }

    /// Run one loop iteration
    ///
    /// # Errors
    ///
    /// Returns sensor and classifier failures. Storage and output failures on a
    /// fall are reported in the outcome instead.
    pub fn poll(&mut self) -> Result<PollOutcome<A::Error>, PollError<S, C, A>> {
        let ready = self
            .sensor
            .acceleration_available()
            .map_err(PipelineError::Sensor)?
            && self
                .sensor
                .gyroscope_available()
                .map_err(PipelineError::Sensor)?;
        if !ready {
            return Ok(PollOutcome::NoData);
        }

        let gyro = self
            .sensor
            .read_gyroscope()
            .map_err(PipelineError::Sensor)?;
        let accel = self
            .sensor
            .read_acceleration()
            .map_err(PipelineError::Sensor)?;

        match self.capture.step(accel, gyro) {
            Some(window) => self.handle_window(&window),
            None => Ok(PollOutcome::Sampled(self.capture.state())),
        }
    }

    fn handle_window(
        &mut self,
        window: &SignalWindow<N>,
    ) -> Result<PollOutcome<A::Error>, PollError<S, C, A>> {
        let features = extract_features(window);
        let scores = self
            .classifier
            .classify(&features)
            .map_err(PipelineError::Classifier)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Window of {} samples: not fall {}, fall {}",
            window.len(),
            scores.not_fall,
            scores.fall
        );

        if !scores.is_fall() {
            return Ok(PollOutcome::NotFall { scores, features });
        }

        // The window is gone after the next step, so persist it first
        let name = fall_name(self.falls);
        self.falls = self.falls.wrapping_add(1);
        let stored = self.store.write(&name, window, true);

        #[cfg(feature = "defmt")]
        if let Err(e) = stored {
            defmt::warn!("Could not store {}: {}", name.as_str(), e);
        }

        let woken = self.actuators.wake_companion();
        let alarm = self.actuators.raise_alarm();
        if alarm.is_ok() {
            self.alarm_active = true;
        }
        let outputs = woken.and(alarm);

        #[cfg(feature = "defmt")]
        if outputs.is_err() {
            defmt::warn!("Fall outputs could not be fully raised");
        }

        Ok(PollOutcome::Fall {
            scores,
            features,
            name,
            stored,
            outputs,
        })
    }

    /// Stop the alarm and drop the companion wake line
    ///
    /// # Errors
    ///
    /// Returns an error if an output cannot be driven.
    pub fn acknowledge(&mut self) -> Result<(), PollError<S, C, A>> {
        self.actuators
            .release_companion()
            .map_err(PipelineError::Output)?;
        self.actuators
            .clear_alarm()
            .map_err(PipelineError::Output)?;
        self.alarm_active = false;
        Ok(())
    }

    /// Whether a fall alarm is waiting for [`Self::acknowledge`]
    pub const fn alarm_active(&self) -> bool {
        self.alarm_active
    }

    /// Number of falls detected so far
    pub const fn fall_count(&self) -> u32 {
        self.falls
    }

    /// Capture state machine
    pub const fn capture(&self) -> &CaptureStateMachine<N> {
        &self.capture
    }

    /// The sensor
    pub const fn sensor(&self) -> &S {
        &self.sensor
    }

    /// The sensor, mutably
    pub const fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// The signal store, mutably
    pub const fn store_mut(&mut self) -> &mut T {
        &mut self.store
    }

    /// The outputs
    pub const fn actuators(&self) -> &A {
        &self.actuators
    }

    /// Take the parts back
    pub fn release(self) -> (S, C, A, T) {
        (self.sensor, self.classifier, self.actuators, self.store)
    }
}
