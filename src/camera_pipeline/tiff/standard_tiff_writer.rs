use std::io::{Cursor, Write};
use tracing::debug;
use tiff::encoder::{colortype, compression::DeflateLevel, Compression, TiffEncoder};
use tiff::tags::Predictor;
use crate::camera_pipeline::common::error::{Result, ConversionError};
use crate::camera_pipeline::cv::{CvType, MatView};
use crate::camera_pipeline::tiff::types::{ExportConfig, TiffCompression};
use crate::camera_pipeline::tiff::writer::FrameWriter;

/// Writes 8-bit gray/BGR/BGRA and 32-bit float gray views to TIFF.
///
/// Colour views are stored in the vision library's BGR(A) order and are
/// swapped to the RGB(A) order TIFF expects.
pub struct StandardTiffWriter;

fn encode_err(e: impl std::fmt::Display) -> ConversionError {
    ConversionError::EncodeError(e.to_string())
}

/// Copies the view's rows into one contiguous buffer, dropping row padding.
fn packed_rows(view: &MatView<'_>) -> Vec<u8> {
    let mut packed = Vec::with_capacity(view.width() * view.height() * view.cv_type().elem_size());
    for row in (0..view.height()).filter_map(|y| view.row(y)) {
        packed.extend_from_slice(row);
    }
    packed
}

fn swap_red_blue(data: &mut [u8], channels: usize) {
    for px in data.chunks_exact_mut(channels) {
        px.swap(0, 2);
    }
}

fn new_encoder<'b>(
    buffer: &'b mut Vec<u8>,
    config: &ExportConfig,
    integer_samples: bool,
) -> Result<TiffEncoder<Cursor<&'b mut Vec<u8>>>> {
    let compression = match config.compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
        TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
    };

    let mut encoder = TiffEncoder::new(Cursor::new(buffer))
        .map_err(encode_err)?
        .with_compression(compression);

    if let (Some(predictor_val), true) = (config.predictor, integer_samples) {
        let predictor = match predictor_val {
            2 => Predictor::Horizontal,
            _ => Predictor::None,
        };
        encoder = encoder.with_predictor(predictor);
    }

    Ok(encoder)
}

impl FrameWriter for StandardTiffWriter {
    fn write_view(&self, view: &MatView<'_>, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        let cv_type = view.cv_type();
        debug!("Encoding TIFF image: {}x{} {}", view.width(), view.height(), cv_type);

        let width = u32::try_from(view.width())
            .map_err(|_| ConversionError::InvalidDimensions(view.width(), view.height()))?;
        let height = u32::try_from(view.height())
            .map_err(|_| ConversionError::InvalidDimensions(view.width(), view.height()))?;

        let mut pixels = packed_rows(view);
        let mut buffer = Vec::new();

        match cv_type {
            CvType::CV_8UC1 => {
                new_encoder(&mut buffer, config, true)?
                    .write_image::<colortype::Gray8>(width, height, &pixels)
                    .map_err(encode_err)?;
            }
            CvType::CV_8UC3 => {
                swap_red_blue(&mut pixels, 3);
                new_encoder(&mut buffer, config, true)?
                    .write_image::<colortype::RGB8>(width, height, &pixels)
                    .map_err(encode_err)?;
            }
            CvType::CV_8UC4 => {
                swap_red_blue(&mut pixels, 4);
                new_encoder(&mut buffer, config, true)?
                    .write_image::<colortype::RGBA8>(width, height, &pixels)
                    .map_err(encode_err)?;
            }
            CvType::CV_32FC1 => {
                let samples: Vec<f32> = pixels
                    .chunks_exact(4)
                    .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                    .collect();
                new_encoder(&mut buffer, config, false)?
                    .write_image::<colortype::Gray32Float>(width, height, &samples)
                    .map_err(encode_err)?;
            }
            other => {
                return Err(ConversionError::UnsupportedFormat(format!(
                    "TIFF export of {other}"
                )));
            }
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
