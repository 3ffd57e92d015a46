use crate::core::error::ProcessError;

/// Parameter id of the limiting threshold (linear amplitude).
pub const THRESHOLD: i32 = 1;

/// Parameters understood by the processors in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ParameterId {
    /// Maximum sample magnitude, linear scale.
    Threshold = THRESHOLD,
}

impl TryFrom<i32> for ParameterId {
    type Error = ProcessError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            THRESHOLD => Ok(ParameterId::Threshold),
            other => Err(ProcessError::UnknownParameter(other)),
        }
    }
}
