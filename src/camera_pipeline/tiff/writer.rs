use std::io::Write;
use crate::camera_pipeline::common::error::Result;
use crate::camera_pipeline::cv::MatView;
use crate::camera_pipeline::tiff::types::ExportConfig;

pub trait FrameWriter {
    fn write_view(&self, view: &MatView<'_>, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
