//! Camera configuration types

/// Sensor output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 2208x1242
    Hd2k,
    /// 1920x1080
    Hd1080,
    /// 1280x720
    Hd720,
    /// 672x376
    Vga,
}

impl Resolution {
    /// Width and height of a single eye in pixels
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Resolution::Hd2k => (2208, 1242),
            Resolution::Hd1080 => (1920, 1080),
            Resolution::Hd720 => (1280, 720),
            Resolution::Vga => (672, 376),
        }
    }
}

/// Depth computation quality. `None` disables depth entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    None,
    Performance,
    Quality,
    Ultra,
}

/// How holes in the depth map are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensingMode {
    /// Leave occlusions and invalid regions empty
    Standard,
    /// Fill holes for a dense map
    Fill,
}

/// Which eye to retrieve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Left,
    Right,
}

/// Parameters applied when the camera is opened
#[derive(Debug, Clone)]
pub struct InitParameters {
    pub camera_resolution: Resolution,
    pub depth_mode: DepthMode,
    /// Requested frame rate. 0 selects the resolution's default.
    pub camera_fps: u32,
}

impl Default for InitParameters {
    fn default() -> Self {
        Self {
            camera_resolution: Resolution::Hd720,
            depth_mode: DepthMode::None,
            camera_fps: 0,
        }
    }
}

impl InitParameters {
    pub fn builder() -> InitParametersBuilder {
        InitParametersBuilder::default()
    }
}

/// Builder for InitParameters
#[derive(Default)]
pub struct InitParametersBuilder {
    camera_resolution: Option<Resolution>,
    depth_mode: Option<DepthMode>,
    camera_fps: Option<u32>,
}

impl InitParametersBuilder {
    pub fn camera_resolution(mut self, resolution: Resolution) -> Self {
        self.camera_resolution = Some(resolution);
        self
    }

    pub fn depth_mode(mut self, mode: DepthMode) -> Self {
        self.depth_mode = Some(mode);
        self
    }

    pub fn camera_fps(mut self, fps: u32) -> Self {
        self.camera_fps = Some(fps);
        self
    }

    pub fn build(self) -> InitParameters {
        let default = InitParameters::default();
        InitParameters {
            camera_resolution: self.camera_resolution.unwrap_or(default.camera_resolution),
            depth_mode: self.depth_mode.unwrap_or(default.depth_mode),
            camera_fps: self.camera_fps.unwrap_or(default.camera_fps),
        }
    }
}

/// Parameters applied to each grab
#[derive(Debug, Clone)]
pub struct RuntimeParameters {
    pub sensing_mode: SensingMode,
    pub enable_depth: bool,
}

impl Default for RuntimeParameters {
    fn default() -> Self {
        Self {
            sensing_mode: SensingMode::Standard,
            enable_depth: true,
        }
    }
}

/// Static information about an opened camera
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInformation {
    pub serial_number: u32,
    pub camera_resolution: (usize, usize),
    pub camera_fps: u32,
}
