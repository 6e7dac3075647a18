//! Camera-to-vision buffer bridge
//!
//! This module wraps a stereo camera's single-frame capture and exposes the
//! captured buffer as a zero-copy view in OpenCV's type vocabulary, with an
//! optional TIFF export of that view.

pub mod common;
pub mod mat;
pub mod cv;
pub mod conversions;
pub mod camera;
pub mod tiff;

pub use common::{
    ConversionError,
    Result,
};

pub use mat::{
    DeviceBuffer,
    ElementType,
    ImageDescriptor,
    MatType,
    MemoryLocation,
    SourceMat,
};

pub use cv::{
    CvDepth,
    CvType,
    MatView,
};

pub use conversions::{
    map,
    map_raw,
    resolve_cv_type,
    source_to_view,
};

pub use camera::{
    CameraInformation,
    CameraSession,
    DepthMode,
    InitParameters,
    InitParametersBuilder,
    MockStereoCamera,
    Resolution,
    RuntimeParameters,
    SensingMode,
    StereoCamera,
    View,
};

pub use tiff::{
    ExportConfig,
    ExportConfigBuilder,
    FrameWriter,
    StandardTiffWriter,
    TiffCompression,
};
