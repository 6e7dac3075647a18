//! Owning frame buffer in the camera SDK's representation.

use tracing::debug;

use crate::camera_pipeline::common::error::{ConversionError, Result};
use crate::camera_pipeline::mat::device::DeviceBuffer;
use crate::camera_pipeline::mat::types::{ImageDescriptor, MatType, MemoryLocation};

/// Frame buffer filled by the camera.
///
/// A `SourceMat` exclusively owns its pixel memory. Views produced by
/// [`source_to_view`](crate::camera_pipeline::source_to_view) borrow it, so
/// the buffer cannot be refilled or dropped while a view is alive.
#[derive(Debug)]
pub struct SourceMat {
    descriptor: ImageDescriptor,
    host: Option<Vec<u8>>,
    device: Option<DeviceBuffer>,
}

fn validate_layout(width: usize, height: usize, mat_type: MatType) -> Result<usize> {
    if mat_type.channels == 0 || mat_type.channels > 4 {
        return Err(ConversionError::UnsupportedFormat(format!(
            "{mat_type} has an unsupported channel count"
        )));
    }
    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimensions(width, height));
    }
    width
        .checked_mul(mat_type.pixel_size())
        .and_then(|row| row.checked_mul(height))
        .ok_or(ConversionError::InvalidDimensions(width, height))
}

impl SourceMat {
    /// Allocates a zeroed, tightly packed buffer in the requested memory.
    pub fn new(width: usize, height: usize, mat_type: MatType, location: MemoryLocation) -> Result<Self> {
        let len = validate_layout(width, height, mat_type)?;

        let host = location.has_host().then(|| vec![0u8; len]);
        let device = if location.has_device() {
            Some(DeviceBuffer::alloc_zeroed(len)?)
        } else {
            None
        };

        debug!(width, height, %mat_type, ?location, "Allocated source mat");

        Ok(Self {
            descriptor: ImageDescriptor::packed(width, height, mat_type),
            host,
            device,
        })
    }

    /// Adopts an existing tightly packed host buffer.
    pub fn from_host(width: usize, height: usize, mat_type: MatType, data: Vec<u8>) -> Result<Self> {
        let len = validate_layout(width, height, mat_type)?;
        if data.len() != len {
            return Err(ConversionError::BufferTooSmall {
                required: len,
                actual: data.len(),
            });
        }

        Ok(Self {
            descriptor: ImageDescriptor::packed(width, height, mat_type),
            host: Some(data),
            device: None,
        })
    }

    /// A declared but unallocated buffer: geometry only, no memory anywhere.
    pub fn unallocated(width: usize, height: usize, mat_type: MatType) -> Self {
        Self {
            descriptor: ImageDescriptor::packed(width, height, mat_type),
            host: None,
            device: None,
        }
    }

    pub fn descriptor(&self) -> &ImageDescriptor {
        &self.descriptor
    }

    pub fn width(&self) -> usize {
        self.descriptor.width
    }

    pub fn height(&self) -> usize {
        self.descriptor.height
    }

    pub fn mat_type(&self) -> MatType {
        self.descriptor.mat_type
    }

    /// Row stride in bytes
    pub fn step_bytes(&self) -> usize {
        self.descriptor.step
    }

    pub fn is_allocated(&self) -> bool {
        self.host.is_some() || self.device.is_some()
    }

    pub fn host_data(&self) -> Option<&[u8]> {
        self.host.as_deref()
    }

    pub fn host_data_mut(&mut self) -> Option<&mut [u8]> {
        self.host.as_deref_mut()
    }

    pub fn device_data(&self) -> Option<&DeviceBuffer> {
        self.device.as_ref()
    }

    /// Copies host memory into the device mirror.
    pub fn update_device_from_host(&mut self) -> Result<()> {
        let host = self.host.as_deref().ok_or(ConversionError::NoHostBuffer)?;
        let device = self.device.as_mut().ok_or_else(|| {
            ConversionError::CudaError("source mat has no device allocation".into())
        })?;
        device.upload(host)
    }

    /// Copies the device mirror back into host memory.
    pub fn update_host_from_device(&mut self) -> Result<()> {
        let device = self.device.as_ref().ok_or_else(|| {
            ConversionError::CudaError("source mat has no device allocation".into())
        })?;
        let host = self.host.as_mut().ok_or(ConversionError::NoHostBuffer)?;
        let data = device.download()?;
        if data.len() != host.len() {
            return Err(ConversionError::BufferTooSmall {
                required: host.len(),
                actual: data.len(),
            });
        }
        host.copy_from_slice(&data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera_pipeline::mat::types::ElementType;

    #[test]
    fn test_new_host_buffer_is_zeroed_and_packed() {
        let mat = SourceMat::new(4, 3, MatType::U8_C4, MemoryLocation::Cpu).unwrap();

        assert_eq!(mat.step_bytes(), 16);
        assert_eq!(mat.host_data().unwrap().len(), 48);
        assert!(mat.host_data().unwrap().iter().all(|&b| b == 0));
        assert!(mat.device_data().is_none());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let result = SourceMat::new(0, 10, MatType::U8_C1, MemoryLocation::Cpu);
        assert!(matches!(result.unwrap_err(), ConversionError::InvalidDimensions(0, 10)));
    }

    #[test]
    fn test_new_rejects_bad_channel_count() {
        let result = SourceMat::new(2, 2, MatType::new(ElementType::U8, 0), MemoryLocation::Cpu);
        assert!(matches!(result.unwrap_err(), ConversionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_from_host_checks_length() {
        let result = SourceMat::from_host(2, 2, MatType::F32_C1, vec![0u8; 15]);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::BufferTooSmall { required: 16, actual: 15 }
        ));
    }

    #[test]
    fn test_unallocated_has_no_memory() {
        let mut mat = SourceMat::unallocated(8, 8, MatType::U8_C3);

        assert!(!mat.is_allocated());
        assert!(mat.host_data().is_none());
        assert!(matches!(
            mat.update_device_from_host().unwrap_err(),
            ConversionError::NoHostBuffer
        ));
    }

    #[cfg(not(jetson_cuda))]
    #[test]
    fn test_gpu_allocation_fails_without_cuda() {
        let result = SourceMat::new(8, 8, MatType::U8_C4, MemoryLocation::Gpu);
        assert!(matches!(result.unwrap_err(), ConversionError::CudaError(_)));
    }
}
