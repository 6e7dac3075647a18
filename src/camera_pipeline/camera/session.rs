use tracing::{debug, error, info, instrument};

use crate::camera_pipeline::camera::source::StereoCamera;
use crate::camera_pipeline::camera::types::{CameraInformation, InitParameters, RuntimeParameters, View};
use crate::camera_pipeline::common::error::Result;
use crate::camera_pipeline::mat::{MatType, MemoryLocation, SourceMat};

/// Exclusive owner of an opened camera.
///
/// The camera is closed when the session is dropped, including when a
/// capture fails part way through.
pub struct CameraSession<C: StereoCamera> {
    camera: C,
}

impl<C: StereoCamera> CameraSession<C> {
    /// Opens `camera`. On failure the camera is closed before the error is returned.
    #[instrument(skip(camera, params), fields(resolution = ?params.camera_resolution, depth_mode = ?params.depth_mode))]
    pub fn open(mut camera: C, params: &InitParameters) -> Result<Self> {
        if let Err(e) = camera.open(params) {
            error!("Failed to open camera: {}", e);
            camera.close();
            return Err(e);
        }

        info!("Camera opened");
        Ok(Self { camera })
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn information(&self) -> Result<CameraInformation> {
        self.camera.camera_information()
    }

    /// Grabs one frame and returns the left view as a full-resolution BGRA buffer.
    #[instrument(skip(self, runtime), fields(sensing_mode = ?runtime.sensing_mode))]
    pub fn capture_image(&mut self, runtime: &RuntimeParameters) -> Result<SourceMat> {
        let (width, height) = self.camera.camera_information()?.camera_resolution;
        let mut image = SourceMat::new(width, height, MatType::U8_C4, MemoryLocation::Cpu)?;

        self.capture_into(&mut image, View::Left, runtime)?;

        info!(width, height, "Captured frame");
        Ok(image)
    }

    /// Grabs one frame into a caller-owned buffer.
    ///
    /// Takes `mat` mutably, so any view borrowed from it must be dropped first.
    pub fn capture_into(&mut self, mat: &mut SourceMat, view: View, runtime: &RuntimeParameters) -> Result<()> {
        self.camera.grab(runtime)?;
        self.camera.retrieve_image(mat, view)?;
        debug!(?view, "Retrieved image");
        Ok(())
    }

    pub fn close(self) {}
}

impl<C: StereoCamera> Drop for CameraSession<C> {
    fn drop(&mut self) {
        if self.camera.is_opened() {
            self.camera.close();
            debug!("Camera closed");
        }
    }
}
