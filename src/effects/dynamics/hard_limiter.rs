use crate::core::error::ProcessError;
use crate::core::parameter::ParameterId;
use crate::core::units::db_to_linear;
use crate::FrameProcessor;

/// A memoryless, sign-preserving hard limiter.
///
/// Any sample whose magnitude strictly exceeds the threshold is replaced by
/// `threshold` (positive input) or `-threshold` (zero or negative input).
/// Samples at exactly `±threshold` pass through unchanged.
///
/// The threshold starts unset; processing before it is configured fails with
/// [`ProcessError::Unconfigured`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardLimiter {
    threshold: Option<f32>,
}

impl HardLimiter {
    /// Creates an unconfigured HardLimiter.
    pub fn new() -> Self {
        HardLimiter { threshold: None }
    }

    /// Creates a HardLimiter with a linear threshold.
    pub fn with_threshold(threshold: f32) -> Self {
        HardLimiter {
            threshold: Some(threshold),
        }
    }

    /// Creates a HardLimiter from a threshold in decibels.
    pub fn with_threshold_db(threshold_db: f32) -> Self {
        Self::with_threshold(db_to_linear(threshold_db))
    }

    /// Returns the linear threshold, or `None` if it was never set.
    pub fn threshold(&self) -> Option<f32> {
        self.threshold
    }

    /// Sets the linear threshold. No range validation is applied.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = Some(threshold);
    }

    /// Returns true once a threshold has been set.
    pub fn is_configured(&self) -> bool {
        self.threshold.is_some()
    }
}

/// Limits a single sample to `±threshold`.
#[inline]
pub fn limit_sample(sample: f32, threshold: f32) -> f32 {
    if libm::fabsf(sample) > threshold {
        if sample > 0.0 {
            threshold
        } else {
            -threshold
        }
    } else {
        sample
    }
}

impl FrameProcessor for HardLimiter {
    fn process_block(&mut self, buffer: &mut [f32]) -> Result<(), ProcessError> {
        if buffer.is_empty() {
            return Err(ProcessError::EmptyBlock);
        }
        let threshold = self.threshold.ok_or(ProcessError::Unconfigured)?;

        for sample in buffer.iter_mut() {
            *sample = limit_sample(*sample, threshold);
        }
        Ok(())
    }

    fn set_parameter(&mut self, parameter: i32, value: f32) -> Result<(), ProcessError> {
        match ParameterId::try_from(parameter)? {
            ParameterId::Threshold => self.set_threshold(value),
        }
        Ok(())
    }

    fn parameter(&self, parameter: i32) -> Option<f32> {
        match ParameterId::try_from(parameter).ok()? {
            ParameterId::Threshold => self.threshold,
        }
    }

    #[cfg(feature = "debug_visualize")]
    fn name(&self) -> &str {
        "HardLimiter"
    }
}
