use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use stereocam_bridge::camera_pipeline::{
    source_to_view, CameraSession, DepthMode, ExportConfig, FrameWriter, InitParameters,
    MockStereoCamera, Resolution, RuntimeParameters, SensingMode, StandardTiffWriter,
    TiffCompression,
};
use stereocam_bridge::logger::{self, info};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ResolutionArg {
    Hd2k,
    Hd1080,
    Hd720,
    Vga,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::Hd2k => Resolution::Hd2k,
            ResolutionArg::Hd1080 => Resolution::Hd1080,
            ResolutionArg::Hd720 => Resolution::Hd720,
            ResolutionArg::Vga => Resolution::Vga,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DepthModeArg {
    None,
    Performance,
    Quality,
    Ultra,
}

impl From<DepthModeArg> for DepthMode {
    fn from(arg: DepthModeArg) -> Self {
        match arg {
            DepthModeArg::None => DepthMode::None,
            DepthModeArg::Performance => DepthMode::Performance,
            DepthModeArg::Quality => DepthMode::Quality,
            DepthModeArg::Ultra => DepthMode::Ultra,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SensingModeArg {
    Standard,
    Fill,
}

impl From<SensingModeArg> for SensingMode {
    fn from(arg: SensingModeArg) -> Self {
        match arg {
            SensingModeArg::Standard => SensingMode::Standard,
            SensingModeArg::Fill => SensingMode::Fill,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    Deflate,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::Deflate => TiffCompression::DeflateBalanced,
        }
    }
}

/// Capture one frame from the stereo camera and view it as an OpenCV matrix
#[derive(Parser, Debug)]
#[command(name = "stereocam-bridge", version)]
struct Args {
    #[arg(long, value_enum, default_value = "hd720")]
    resolution: ResolutionArg,

    #[arg(long, value_enum, default_value = "none")]
    depth_mode: DepthModeArg,

    #[arg(long, value_enum, default_value = "standard")]
    sensing_mode: SensingModeArg,

    /// Write the captured frame to this TIFF file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "none")]
    compression: CompressionArg,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    info!("Starting stereocam-bridge...");

    let init_params = InitParameters::builder()
        .camera_resolution(args.resolution.into())
        .depth_mode(args.depth_mode.into())
        .build();
    let runtime = RuntimeParameters {
        sensing_mode: args.sensing_mode.into(),
        ..RuntimeParameters::default()
    };

    let mut session = CameraSession::open(MockStereoCamera::new(), &init_params)
        .context("failed to open camera")?;
    let camera_info = session.information()?;
    info!(
        serial = camera_info.serial_number,
        fps = camera_info.camera_fps,
        "Camera ready"
    );

    let image = session.capture_image(&runtime).context("failed to capture frame")?;
    let view = source_to_view(&image).context("failed to map frame")?;

    info!(
        width = view.width(),
        height = view.height(),
        cv_type = %view.cv_type(),
        code = view.cv_type().code(),
        step = view.step(),
        "Frame mapped without copy"
    );

    if let Some(path) = &args.snapshot {
        let config = ExportConfig::builder()
            .compression(args.compression.into())
            .build();
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        StandardTiffWriter
            .write_view(&view, &mut file, &config)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "Snapshot written");
    }

    Ok(())
}
