//! Float comparison utilities for checking processed output against expected vectors.

use core::fmt;

/// Absolute tolerance used by the reference vectors.
pub const DEFAULT_TOLERANCE: f32 = 1e-4;

/// Result of comparing two audio buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub max_abs_diff: f32,
    pub max_abs_diff_index: usize,
    pub mean_abs_diff: f32,
    pub mismatches: usize,
    pub total: usize,
}

impl ComparisonResult {
    /// True when every sample pair is within tolerance and the lengths agree.
    pub fn is_match(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max_abs_diff={} (at index {}), mean_abs_diff={}, mismatches={}/{}",
            self.max_abs_diff,
            self.max_abs_diff_index,
            self.mean_abs_diff,
            self.mismatches,
            self.total,
        )
    }
}

/// Compares two f32 slices element-wise with an absolute tolerance.
///
/// Samples without a counterpart in the other slice count as mismatches,
/// so slices of different length never compare equal.
pub fn compare_f32(actual: &[f32], expected: &[f32], tolerance: f32) -> ComparisonResult {
    let total = actual.len().max(expected.len());
    let paired = actual.len().min(expected.len());
    let mut max_abs_diff = 0.0f32;
    let mut max_abs_diff_index = 0;
    let mut sum_abs_diff = 0.0f64;
    let mut mismatches = total - paired;

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = libm::fabsf(a - e);
        sum_abs_diff += diff as f64;
        if diff > max_abs_diff {
            max_abs_diff = diff;
            max_abs_diff_index = i;
        }
        if diff.is_nan() || diff > tolerance {
            mismatches += 1;
        }
    }

    ComparisonResult {
        max_abs_diff,
        max_abs_diff_index,
        mean_abs_diff: if paired > 0 {
            (sum_abs_diff / paired as f64) as f32
        } else {
            0.0
        },
        mismatches,
        total,
    }
}
