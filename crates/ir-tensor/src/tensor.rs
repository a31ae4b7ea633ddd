use half::f16;

use crate::device::Device;
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// Read-only view of a tensor that may live off-host.
///
/// Consumers that only inspect values (diagnostics, debugging probes) go
/// through this trait: they read the shape, then request an owned host copy
/// instead of touching the device buffer.
pub trait DeviceTensor {
    /// Returns the tensor's shape.
    fn shape(&self) -> &Shape;

    /// Returns the device the tensor is resident on.
    fn device(&self) -> Device;

    /// Copy the tensor into an independently owned, host-resident F32 tensor.
    ///
    /// The source buffer is left untouched.
    fn copy_to_host(&self) -> Result<Tensor>;
}

/// A dense, row-major tensor tagged with the device it is resident on.
#[derive(Debug, Clone)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
    device: Device,
}

impl Tensor {
    /// Create a new host tensor from f32 data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<f32>, shape: Shape) -> Self {
        Self::check_len(data.len(), &shape);
        Tensor {
            storage: CpuStorage::from_f32_vec(data),
            shape,
            device: Device::Cpu,
        }
    }

    /// Create a new host tensor from half-precision data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn from_f16(data: Vec<f16>, shape: Shape) -> Self {
        Self::check_len(data.len(), &shape);
        Tensor {
            storage: CpuStorage::from_f16_vec(data),
            shape,
            device: Device::Cpu,
        }
    }

    fn check_len(len: usize, shape: &Shape) {
        assert_eq!(
            len,
            shape.numel(),
            "data length {} does not match shape {:?} (numel={})",
            len,
            shape,
            shape.numel()
        );
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Returns the device this tensor is resident on.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Returns the underlying data as an f32 slice.
    ///
    /// # Errors
    /// Fails if the tensor is not host-resident or not stored as F32.
    pub fn data_f32(&self) -> Result<&[f32]> {
        if !self.device.is_host() {
            return Err(TensorError::Other(format!(
                "tensor on {} must be copied to host before reading",
                self.device
            )));
        }
        self.storage.as_f32_slice()
    }

    /// Move the tensor to another device, keeping its dtype.
    pub fn to_device(self, device: Device) -> Tensor {
        Tensor { device, ..self }
    }

    /// Returns the underlying storage reference.
    pub fn storage(&self) -> &CpuStorage {
        &self.storage
    }
}

impl DeviceTensor for Tensor {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn device(&self) -> Device {
        self.device
    }

    fn copy_to_host(&self) -> Result<Tensor> {
        Ok(Tensor {
            storage: CpuStorage::from_f32_vec(self.storage.to_f32_vec()),
            shape: self.shape.clone(),
            device: Device::Cpu,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_tensor() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(vec![2, 3]));
        assert_eq!(t.shape().ndim(), 2);
        assert_eq!(t.shape().dim(0), 2);
        assert_eq!(t.shape().dim(1), 3);
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.device(), Device::Cpu);
        assert_eq!(t.data_f32().unwrap(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic]
    fn test_new_shape_mismatch_panics() {
        let _t = Tensor::new(vec![1.0, 2.0], Shape::new(vec![3]));
    }

    #[test]
    fn test_device_tensor_not_readable() {
        let t = Tensor::new(vec![1.0, 2.0], Shape::new(vec![1, 2]))
            .to_device(Device::Accelerator { ordinal: 0 });
        assert!(t.data_f32().is_err());
    }

    #[test]
    fn test_copy_to_host_from_accelerator() {
        let src = Tensor::new(vec![0.25, -1.0], Shape::new(vec![1, 2]))
            .to_device(Device::Accelerator { ordinal: 3 });
        let host = src.copy_to_host().unwrap();
        assert_eq!(host.device(), Device::Cpu);
        assert_eq!(host.shape(), src.shape());
        assert_eq!(host.data_f32().unwrap(), &[0.25, -1.0]);
        // The source keeps its residency.
        assert_eq!(src.device(), Device::Accelerator { ordinal: 3 });
    }

    #[test]
    fn test_copy_to_host_widens_f16() {
        let data = vec![f16::from_f32(1.5), f16::from_f32(-0.125), f16::from_f32(3.0)];
        let t = Tensor::from_f16(data, Shape::new(vec![1, 3]));
        assert_eq!(t.dtype(), DType::F16);
        assert!(t.data_f32().is_err());

        let host = t.copy_to_host().unwrap();
        assert_eq!(host.dtype(), DType::F32);
        let values = host.data_f32().unwrap();
        assert_relative_eq!(values[0], 1.5);
        assert_relative_eq!(values[1], -0.125);
        assert_relative_eq!(values[2], 3.0);
    }
}
