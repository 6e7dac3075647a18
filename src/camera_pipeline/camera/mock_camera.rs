use tracing::{debug, warn};

use crate::camera_pipeline::camera::source::StereoCamera;
use crate::camera_pipeline::camera::types::{
    CameraInformation, InitParameters, Resolution, RuntimeParameters, View,
};
use crate::camera_pipeline::common::error::{ConversionError, Result};
use crate::camera_pipeline::mat::{MatType, SourceMat};

const MOCK_SERIAL_NUMBER: u32 = 10_027_441;

/// Horizontal shift between the eyes in the generated pattern, in pixels.
const MOCK_DISPARITY: usize = 64;

/// Deterministic stand-in for a stereo camera.
///
/// Each retrieved pixel is the BGRA value `[x + shift, y, frame, 255]`
/// (wrapped to 8 bits), where `shift` is 0 for the left eye and
/// `MOCK_DISPARITY` for the right. Three and one channel buffers receive the
/// leading channels of that value.
#[derive(Debug, Default)]
pub struct MockStereoCamera {
    opened: bool,
    resolution: Option<Resolution>,
    fps: u32,
    frame_index: u64,
    grabbed: bool,
    fail_on_open: Option<String>,
}

fn default_fps(resolution: Resolution) -> u32 {
    match resolution {
        Resolution::Hd2k => 15,
        Resolution::Hd1080 => 30,
        Resolution::Hd720 => 60,
        Resolution::Vga => 100,
    }
}

impl MockStereoCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera whose `open` always fails with `reason`.
    pub fn failing_open(reason: impl Into<String>) -> Self {
        Self {
            fail_on_open: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of frames grabbed so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// The BGRA value the current frame holds at (`x`, `y`) for `view`.
    pub fn pattern_pixel(&self, x: usize, y: usize, view: View) -> [u8; 4] {
        let shift = match view {
            View::Left => 0,
            View::Right => MOCK_DISPARITY,
        };
        [
            ((x + shift) % 256) as u8,
            (y % 256) as u8,
            (self.frame_index % 256) as u8,
            u8::MAX,
        ]
    }

    fn ensure_opened(&self) -> Result<()> {
        if self.opened {
            Ok(())
        } else {
            Err(ConversionError::CameraNotOpened)
        }
    }
}

impl StereoCamera for MockStereoCamera {
    fn open(&mut self, params: &InitParameters) -> Result<()> {
        if self.opened {
            return Err(ConversionError::Camera("camera already opened".into()));
        }
        if let Some(reason) = &self.fail_on_open {
            return Err(ConversionError::Camera(reason.clone()));
        }

        let resolution = params.camera_resolution;
        self.fps = match params.camera_fps {
            0 => default_fps(resolution),
            fps => fps,
        };
        self.resolution = Some(resolution);
        self.opened = true;

        debug!(?resolution, fps = self.fps, "Mock camera opened");
        Ok(())
    }

    fn is_opened(&self) -> bool {
        self.opened
    }

    fn camera_information(&self) -> Result<CameraInformation> {
        self.ensure_opened()?;
        let resolution = self.resolution.ok_or(ConversionError::CameraNotOpened)?;
        Ok(CameraInformation {
            serial_number: MOCK_SERIAL_NUMBER,
            camera_resolution: resolution.dimensions(),
            camera_fps: self.fps,
        })
    }

    fn grab(&mut self, _runtime: &RuntimeParameters) -> Result<()> {
        self.ensure_opened()?;
        self.frame_index += 1;
        self.grabbed = true;
        Ok(())
    }

    fn retrieve_image(&mut self, mat: &mut SourceMat, view: View) -> Result<()> {
        self.ensure_opened()?;
        if !self.grabbed {
            return Err(ConversionError::Camera("no frame has been grabbed".into()));
        }

        let (width, height) = self.camera_information()?.camera_resolution;
        if (mat.width(), mat.height()) != (width, height) {
            return Err(ConversionError::Camera(format!(
                "buffer is {}x{}, camera delivers {}x{}",
                mat.width(),
                mat.height(),
                width,
                height
            )));
        }

        let mat_type = mat.mat_type();
        if !matches!(mat_type, MatType::U8_C1 | MatType::U8_C3 | MatType::U8_C4) {
            return Err(ConversionError::UnsupportedFormat(format!(
                "mock camera cannot produce {mat_type}"
            )));
        }

        let pixel_size = mat_type.pixel_size();
        let step = mat.step_bytes();
        let host = mat.host_data_mut().ok_or(ConversionError::NoHostBuffer)?;
        for (y, row) in host.chunks_mut(step).enumerate() {
            for (x, px) in row[..width * pixel_size].chunks_exact_mut(pixel_size).enumerate() {
                px.copy_from_slice(&self.pattern_pixel(x, y, view)[..pixel_size]);
            }
        }

        if mat.device_data().is_some() {
            mat.update_device_from_host()?;
        }
        Ok(())
    }

    fn close(&mut self) {
        if !self.opened {
            warn!("close called on a camera that is not open");
        }
        self.opened = false;
        self.grabbed = false;
    }
}
