#![no_std]

extern crate alloc;

pub mod core;
pub mod effects;
pub mod ffi;

pub use crate::core::error::ProcessError;
pub use crate::core::frame_processor::FrameProcessor;
