//! Stereo camera acquisition module
//!
//! A camera is driven through the [`StereoCamera`] trait and owned by a
//! [`CameraSession`], which guarantees the device is closed on every exit path.

pub mod types;
mod source;
mod session;
mod mock_camera;

pub use types::{
    CameraInformation,
    DepthMode,
    InitParameters,
    InitParametersBuilder,
    Resolution,
    RuntimeParameters,
    SensingMode,
    View,
};
pub use source::StereoCamera;
pub use session::CameraSession;
pub use mock_camera::MockStereoCamera;
