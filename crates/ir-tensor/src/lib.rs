//! `ir-tensor` - Tensor abstraction for inference-runtime.
//!
//! This crate provides:
//! - A `Tensor` type tagged with the `Device` it is resident on
//! - The `DeviceTensor` trait for read-only consumers that need a host copy
//! - Shape utilities
//! - Data type definitions (F32, F16)

pub mod device;
pub mod dtype;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use device::Device;
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use storage::CpuStorage;
pub use tensor::{DeviceTensor, Tensor};
