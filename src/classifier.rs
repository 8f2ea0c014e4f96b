//! Fall classifier interface
//!
//! The trained model lives outside this crate. Anything that turns a
//! [`FeatureVector`] into a pair of class scores can drive the pipeline.

use crate::features::FeatureVector;

/// Scores for the two classes, in the model's output order
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassScores {
    /// Score of the "not a fall" class
    pub not_fall: f32,
    /// Score of the "fall" class
    pub fall: f32,
}

impl ClassScores {
    /// Create scores from the model's two outputs
    #[must_use]
    pub const fn new(not_fall: f32, fall: f32) -> Self {
        Self { not_fall, fall }
    }

    /// Whether the window is classified as a fall
    ///
    /// Ties count as a fall.
    #[must_use]
    pub fn is_fall(&self) -> bool {
        self.fall >= self.not_fall
    }
}

/// Model that scores a feature vector
pub trait Classifier {
    /// Inference error
    type Error;

    /// Score one feature vector
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails.
    fn classify(&mut self, features: &FeatureVector) -> Result<ClassScores, Self::Error>;
}

impl<C: Classifier + ?Sized> Classifier for &mut C {
    type Error = C::Error;

    fn classify(&mut self, features: &FeatureVector) -> Result<ClassScores, Self::Error> {
        (**self).classify(features)
    }
}
