//! Accelerator-resident pixel storage

#[cfg(not(jetson_cuda))]
use crate::camera_pipeline::common::error::{ConversionError, Result};

#[cfg(jetson_cuda)]
pub use cuda::DeviceBuffer;

#[cfg(jetson_cuda)]
mod cuda {
    use std::sync::Arc;

    use cudarc::driver::safe::{CudaContext, CudaSlice, CudaStream};
    use tracing::debug;

    use crate::camera_pipeline::common::error::{ConversionError, Result};

    fn cuda_err(e: impl std::fmt::Display) -> ConversionError {
        ConversionError::CudaError(e.to_string())
    }

    /// Byte buffer in CUDA device memory on the default stream of device 0.
    pub struct DeviceBuffer {
        stream: Arc<CudaStream>,
        slice: CudaSlice<u8>,
    }

    impl DeviceBuffer {
        pub fn alloc_zeroed(len: usize) -> Result<Self> {
            let ctx = CudaContext::new(0).map_err(cuda_err)?;
            let stream = ctx.default_stream();
            let slice = stream.alloc_zeros::<u8>(len).map_err(cuda_err)?;
            debug!(len, "Allocated device buffer");
            Ok(Self { stream, slice })
        }

        pub fn len(&self) -> usize {
            self.slice.len()
        }

        pub fn upload(&mut self, host: &[u8]) -> Result<()> {
            self.slice = self.stream.clone_htod(host).map_err(cuda_err)?;
            Ok(())
        }

        pub fn download(&self) -> Result<Vec<u8>> {
            self.stream.clone_dtoh(&self.slice).map_err(cuda_err)
        }
    }
}

/// Stand-in used when the crate is built without CUDA support.
///
/// Allocation always fails, so a value of this type never exists at runtime.
#[cfg(not(jetson_cuda))]
pub struct DeviceBuffer {
    len: usize,
}

#[cfg(not(jetson_cuda))]
impl DeviceBuffer {
    pub fn alloc_zeroed(len: usize) -> Result<Self> {
        Err(ConversionError::CudaError(format!(
            "cannot allocate {len} bytes: CUDA is not available on this platform"
        )))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn upload(&mut self, _host: &[u8]) -> Result<()> {
        Err(ConversionError::CudaError("CUDA is not available on this platform".into()))
    }

    pub fn download(&self) -> Result<Vec<u8>> {
        Err(ConversionError::CudaError("CUDA is not available on this platform".into()))
    }
}

impl std::fmt::Debug for DeviceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceBuffer").field("len", &self.len()).finish()
    }
}
