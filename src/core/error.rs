use thiserror::Error;

/// Status code returned by a successful operation.
pub const STATUS_OK: i32 = 0;

/// Errors reported by a [`FrameProcessor`](crate::FrameProcessor).
///
/// Every variant leaves the processor state and the caller's buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The block contained no samples.
    #[error("sample block is empty")]
    EmptyBlock,
    /// A null handle or buffer, or a non-positive sample count, crossed the C boundary.
    #[error("invalid handle, buffer or sample count")]
    InvalidArgument,
    /// The parameter id is not known to this processor.
    #[error("unknown parameter id {0}")]
    UnknownParameter(i32),
    /// Audio was processed before the threshold was set.
    #[error("threshold has not been configured")]
    Unconfigured,
}

impl ProcessError {
    /// Returns the non-zero status code used at the C boundary.
    pub fn status_code(&self) -> i32 {
        match self {
            ProcessError::EmptyBlock | ProcessError::InvalidArgument => -1,
            ProcessError::UnknownParameter(_) => -2,
            ProcessError::Unconfigured => -3,
        }
    }
}

/// Collapses a processor result into a status code (`0` on success).
pub fn status_of(result: Result<(), ProcessError>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.status_code(),
    }
}
