use crate::camera_pipeline::camera::types::{CameraInformation, InitParameters, RuntimeParameters, View};
use crate::camera_pipeline::common::error::Result;
use crate::camera_pipeline::mat::SourceMat;

pub trait StereoCamera {
    /// Opens the device with the given parameters.
    fn open(&mut self, params: &InitParameters) -> Result<()>;

    fn is_opened(&self) -> bool;

    fn camera_information(&self) -> Result<CameraInformation>;

    /// Acquires the next frame into the camera's internal buffers.
    fn grab(&mut self, runtime: &RuntimeParameters) -> Result<()>;

    /// Copies the last grabbed frame for `view` into `mat`.
    fn retrieve_image(&mut self, mat: &mut SourceMat, view: View) -> Result<()>;

    /// Releases the device. Must be a no-op on a closed camera.
    fn close(&mut self);
}
