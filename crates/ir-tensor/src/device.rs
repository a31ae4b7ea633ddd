use std::fmt;

/// Where a tensor's buffer lives.
///
/// Only `Cpu` is host-addressable. Anything resident on an accelerator has to
/// be copied back with [`DeviceTensor::copy_to_host`](crate::DeviceTensor)
/// before its elements can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Device {
    #[default]
    Cpu,
    Accelerator { ordinal: usize },
}

impl Device {
    /// Returns true if elements on this device can be read directly.
    pub fn is_host(&self) -> bool {
        matches!(self, Device::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Accelerator { ordinal } => write!(f, "accel:{}", ordinal),
        }
    }
}
