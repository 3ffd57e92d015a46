use crate::core::error::ProcessError;
use alloc::boxed::Box;

/// The core trait for all audio processors.
///
/// Callers hold processors as `&mut dyn FrameProcessor` or
/// `Box<dyn FrameProcessor>` and never depend on the concrete type.
/// The vtable is shared by every instance of an implementation; per-instance
/// state lives in the implementor.
pub trait FrameProcessor {
    /// Processes a mono block of audio samples in place.
    ///
    /// On error the buffer is left unmodified.
    ///
    /// # Arguments
    /// * `buffer` - The audio buffer to process (in-place).
    fn process_block(&mut self, buffer: &mut [f32]) -> Result<(), ProcessError>;

    /// Sets a parameter value.
    ///
    /// Unknown ids return [`ProcessError::UnknownParameter`] without touching any state.
    ///
    /// # Arguments
    /// * `parameter` - The parameter id, see [`crate::core::parameter`].
    /// * `value` - The new value.
    fn set_parameter(&mut self, parameter: i32, value: f32) -> Result<(), ProcessError>;

    /// Returns the current value of a parameter, or `None` if it is unknown or unset.
    fn parameter(&self, _parameter: i32) -> Option<f32> {
        None
    }

    /// Returns the name of the processor.
    fn name(&self) -> &str {
        #[cfg(feature = "debug_visualize")]
        {
            "Node"
        }
        #[cfg(not(feature = "debug_visualize"))]
        {
            ""
        }
    }
}

impl<T: FrameProcessor + ?Sized> FrameProcessor for Box<T> {
    fn process_block(&mut self, buffer: &mut [f32]) -> Result<(), ProcessError> {
        (**self).process_block(buffer)
    }

    fn set_parameter(&mut self, parameter: i32, value: f32) -> Result<(), ProcessError> {
        (**self).set_parameter(parameter, value)
    }

    fn parameter(&self, parameter: i32) -> Option<f32> {
        (**self).parameter(parameter)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
