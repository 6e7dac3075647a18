//! Camera-side buffer module
//!
//! Types in this module follow the stereo camera SDK's vocabulary: element
//! types, per-buffer memory placement, and the owning frame buffer.

pub mod types;
mod device;
mod source_mat;

pub use types::{ElementType, ImageDescriptor, MatType, MemoryLocation};
pub use device::DeviceBuffer;
pub use source_mat::SourceMat;
