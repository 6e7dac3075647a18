//! TIFF export module
//!
//! Writes a single mapped frame to TIFF, mainly for inspecting captures.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::FrameWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, ExportConfig, ExportConfigBuilder};
