//! C-compatible API for hosts that drive processors through a function table.
//!
//! A C caller sees `ProcessorHandle` as a struct whose first member is a
//! pointer to a [`ProcessorVtbl`]; everything after it is opaque. Calls take
//! the form `handle->vtbl->process_block(handle, buffer, num_samples)`.
//!
//! Return values:
//! - 0 = success
//! - non-zero = failure (see [`ProcessError::status_code`])
//!
//! Failed calls leave both the handle and the buffer untouched.

use crate::core::error::{status_of, ProcessError, STATUS_OK};
use crate::core::parameter::ParameterId;
use crate::effects::dynamics::hard_limiter::HardLimiter;
use crate::FrameProcessor;
use alloc::boxed::Box;
use core::ffi::c_int;

pub type ProcessBlockFn = unsafe extern "C" fn(
    processor: *mut ProcessorHandle,
    buffer: *mut f32,
    num_samples: c_int,
) -> i32;

pub type SetParameterFn =
    unsafe extern "C" fn(processor: *mut ProcessorHandle, parameter: i32, value: f32) -> i32;

/// Function table shared by every handle.
#[repr(C)]
pub struct ProcessorVtbl {
    pub process_block: ProcessBlockFn,
    pub set_parameter: SetParameterFn,
}

/// The one table all handles point at. Dispatch to the concrete
/// implementation happens through the boxed processor behind it.
pub static PROCESSOR_VTBL: ProcessorVtbl = ProcessorVtbl {
    process_block: processor_process_block,
    set_parameter: processor_set_parameter,
};

/// Opaque handle to a processor instance.
#[repr(C)]
pub struct ProcessorHandle {
    pub vtbl: *const ProcessorVtbl,
    processor: Box<dyn FrameProcessor + Send>,
}

impl ProcessorHandle {
    /// Wraps any processor so it can be driven through [`PROCESSOR_VTBL`].
    pub fn new(processor: impl FrameProcessor + Send + 'static) -> Self {
        ProcessorHandle {
            vtbl: &PROCESSOR_VTBL,
            processor: Box::new(processor),
        }
    }

    /// Moves the handle to the heap and hands ownership to the caller.
    ///
    /// Release it with [`hardlimit_free`].
    pub fn into_raw(self) -> *mut ProcessorHandle {
        Box::into_raw(Box::new(self))
    }
}

unsafe extern "C" fn processor_process_block(
    processor: *mut ProcessorHandle,
    buffer: *mut f32,
    num_samples: c_int,
) -> i32 {
    if processor.is_null() || buffer.is_null() || num_samples <= 0 {
        return ProcessError::InvalidArgument.status_code();
    }

    let handle = unsafe { &mut *processor };
    let samples = unsafe { core::slice::from_raw_parts_mut(buffer, num_samples as usize) };
    status_of(handle.processor.process_block(samples))
}

unsafe extern "C" fn processor_set_parameter(
    processor: *mut ProcessorHandle,
    parameter: i32,
    value: f32,
) -> i32 {
    if processor.is_null() {
        return ProcessError::InvalidArgument.status_code();
    }

    let handle = unsafe { &mut *processor };
    status_of(handle.processor.set_parameter(parameter, value))
}

/// Create an unconfigured hard limiter.
///
/// The caller must call `hardlimit_free` when done.
#[no_mangle]
pub extern "C" fn hardlimit_new() -> *mut ProcessorHandle {
    ProcessorHandle::new(HardLimiter::new()).into_raw()
}

/// Release a handle created by `hardlimit_new`.
///
/// # Safety
/// `handle` must be a pointer returned by `hardlimit_new` (or
/// [`ProcessorHandle::into_raw`]) that has not been freed, or NULL (no-op).
#[no_mangle]
pub unsafe extern "C" fn hardlimit_free(handle: *mut ProcessorHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Read back a parameter value into `out`.
///
/// # Safety
/// `handle` must be a live handle and `out` a writable `float`, or NULL.
#[no_mangle]
pub unsafe extern "C" fn hardlimit_get_parameter(
    handle: *const ProcessorHandle,
    parameter: i32,
    out: *mut f32,
) -> i32 {
    if handle.is_null() || out.is_null() {
        return ProcessError::InvalidArgument.status_code();
    }

    let handle = unsafe { &*handle };
    match handle.processor.parameter(parameter) {
        Some(value) => {
            unsafe { *out = value };
            STATUS_OK
        }
        None if ParameterId::try_from(parameter).is_ok() => {
            ProcessError::Unconfigured.status_code()
        }
        None => ProcessError::UnknownParameter(parameter).status_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parameter::THRESHOLD;
    use core::ptr;

    fn vtbl(handle: *mut ProcessorHandle) -> &'static ProcessorVtbl {
        unsafe { &*(*handle).vtbl }
    }

    #[test]
    fn test_process_through_table() {
        let handle = hardlimit_new();
        assert!(!handle.is_null());

        let table = vtbl(handle);
        let mut buffer = [0.3f32, -0.6, 0.0, 0.4, -0.4];
        unsafe {
            assert_eq!((table.set_parameter)(handle, THRESHOLD, 0.4), STATUS_OK);
            assert_eq!(
                (table.process_block)(handle, buffer.as_mut_ptr(), buffer.len() as c_int),
                STATUS_OK
            );
        }
        assert_eq!(buffer, [0.3, -0.4, 0.0, 0.4, -0.4]);

        let mut threshold = 0.0f32;
        unsafe {
            assert_eq!(hardlimit_get_parameter(handle, THRESHOLD, &mut threshold), STATUS_OK);
            hardlimit_free(handle);
        }
        assert_eq!(threshold, 0.4);
    }

    #[test]
    fn test_null_arguments_fail_without_mutation() {
        let handle = hardlimit_new();
        let table = vtbl(handle);
        let mut buffer = [2.0f32, -2.0];

        unsafe {
            assert_eq!((table.set_parameter)(handle, THRESHOLD, 0.5), STATUS_OK);
            assert_ne!(
                (table.process_block)(ptr::null_mut(), buffer.as_mut_ptr(), 2),
                STATUS_OK
            );
            assert_ne!((table.process_block)(handle, ptr::null_mut(), 2), STATUS_OK);
            assert_ne!((table.process_block)(handle, buffer.as_mut_ptr(), 0), STATUS_OK);
            assert_ne!((table.process_block)(handle, buffer.as_mut_ptr(), -3), STATUS_OK);
            assert_ne!((table.set_parameter)(ptr::null_mut(), THRESHOLD, 0.1), STATUS_OK);
            hardlimit_free(handle);
        }
        assert_eq!(buffer, [2.0, -2.0]);
    }

    #[test]
    fn test_unknown_parameter_and_unconfigured() {
        let handle = hardlimit_new();
        let table = vtbl(handle);
        let mut buffer = [1.0f32];
        let mut out = 0.0f32;

        unsafe {
            assert_eq!(
                (table.process_block)(handle, buffer.as_mut_ptr(), 1),
                ProcessError::Unconfigured.status_code()
            );
            assert_eq!(
                (table.set_parameter)(handle, 42, 0.5),
                ProcessError::UnknownParameter(42).status_code()
            );
            assert_eq!(
                hardlimit_get_parameter(handle, THRESHOLD, &mut out),
                ProcessError::Unconfigured.status_code()
            );
            assert_eq!(
                hardlimit_get_parameter(handle, 42, &mut out),
                ProcessError::UnknownParameter(42).status_code()
            );
            hardlimit_free(handle);
        }
        assert_eq!(buffer, [1.0]);
        assert_eq!(out, 0.0);
    }

    #[test]
    fn test_free_null_handle() {
        unsafe { hardlimit_free(ptr::null_mut()) };
    }

    #[test]
    fn test_handles_share_one_table() {
        let a = hardlimit_new();
        let b = ProcessorHandle::new(HardLimiter::with_threshold(0.1)).into_raw();

        unsafe {
            assert!(ptr::eq((*a).vtbl, (*b).vtbl));
            hardlimit_free(a);
            hardlimit_free(b);
        }
    }
}
