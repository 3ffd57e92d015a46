use crate::core::comparison::{compare_f32, ComparisonResult, DEFAULT_TOLERANCE};
use crate::core::error::ProcessError;
use crate::core::parameter::THRESHOLD;
use crate::FrameProcessor;
use alloc::vec::Vec;

/// A reference input/output pair for a limiter at a fixed threshold.
#[derive(Debug, Clone, Copy)]
pub struct TestVector {
    pub name: &'static str,
    pub threshold_linear: f32,
    pub input: &'static [f32],
    pub expected: &'static [f32],
}

/// Output of running a [`TestVector`] through a processor.
#[derive(Debug, Clone)]
pub struct VectorOutcome {
    pub output: Vec<f32>,
    pub comparison: ComparisonResult,
}

impl VectorOutcome {
    pub fn passed(&self) -> bool {
        self.comparison.is_match()
    }
}

impl TestVector {
    /// Configures `processor` with this vector's threshold and processes a copy of its input.
    pub fn run(&self, processor: &mut dyn FrameProcessor) -> Result<VectorOutcome, ProcessError> {
        processor.set_parameter(THRESHOLD, self.threshold_linear)?;

        let mut output = self.input.to_vec();
        processor.process_block(&mut output)?;

        let comparison = compare_f32(&output, self.expected, DEFAULT_TOLERANCE);
        Ok(VectorOutcome { output, comparison })
    }
}

pub const ALL_PASS: TestVector = TestVector {
    name: "all_pass",
    threshold_linear: 1.0,
    input: &[0.1, -0.2, 0.05],
    expected: &[0.1, -0.2, 0.05],
};

pub const ALL_CLIP: TestVector = TestVector {
    name: "all_clip",
    threshold_linear: 0.5,
    input: &[2.0, -3.0, 1.5],
    expected: &[0.5, -0.5, 0.5],
};

/// Samples at exactly `±threshold` must survive untouched.
pub const MIXED: TestVector = TestVector {
    name: "mixed",
    threshold_linear: 0.4,
    input: &[0.3, -0.6, 0.0, 0.4, -0.4],
    expected: &[0.3, -0.4, 0.0, 0.4, -0.4],
};

pub const ALL: [TestVector; 3] = [ALL_PASS, ALL_CLIP, MIXED];
