//! Camera `MatType` to OpenCV `CvType` mapping and zero-copy view construction.

use tracing::debug;

use crate::camera_pipeline::common::error::{ConversionError, Result};
use crate::camera_pipeline::cv::{CvType, MatView};
use crate::camera_pipeline::mat::{ImageDescriptor, MatType, SourceMat};

/// Every camera type with an OpenCV equivalent. Anything absent is unmapped.
const FORMAT_TABLE: [(MatType, CvType); 8] = [
    (MatType::F32_C1, CvType::CV_32FC1),
    (MatType::F32_C2, CvType::CV_32FC2),
    (MatType::F32_C3, CvType::CV_32FC3),
    (MatType::F32_C4, CvType::CV_32FC4),
    (MatType::U8_C1, CvType::CV_8UC1),
    (MatType::U8_C2, CvType::CV_8UC2),
    (MatType::U8_C3, CvType::CV_8UC3),
    (MatType::U8_C4, CvType::CV_8UC4),
];

/// Looks up the OpenCV type for a camera buffer type.
///
/// # Errors
///
/// `InvalidFormat` when the element type and channel count pair has no entry.
/// No nearest match is attempted.
pub fn resolve_cv_type(mat_type: MatType) -> Result<CvType> {
    FORMAT_TABLE
        .iter()
        .find(|(source, _)| *source == mat_type)
        .map(|&(_, target)| target)
        .ok_or(ConversionError::InvalidFormat {
            element: mat_type.element,
            channels: mat_type.channels,
        })
}

/// Resolves the target type and returns it with the minimum number of bytes
/// the host region must span.
fn resolve_layout(descriptor: &ImageDescriptor) -> Result<(CvType, usize)> {
    let cv_type = resolve_cv_type(descriptor.mat_type)?;

    let ImageDescriptor { width, height, step, .. } = *descriptor;
    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimensions(width, height));
    }

    let row_bytes = width
        .checked_mul(cv_type.elem_size())
        .ok_or(ConversionError::InvalidDimensions(width, height))?;
    if step < row_bytes {
        return Err(ConversionError::InvalidStride { step, min: row_bytes });
    }

    let required = step
        .checked_mul(height - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .ok_or(ConversionError::InvalidDimensions(width, height))?;

    Ok((cv_type, required))
}

/// Builds an OpenCV-typed view over a camera buffer's host memory.
///
/// `host` is `None` when the buffer has no host-accessible allocation. Width,
/// height and stride are carried over unchanged and no pixel data is copied.
pub fn map<'a>(descriptor: &ImageDescriptor, host: Option<&'a [u8]>) -> Result<MatView<'a>> {
    let (cv_type, required) = resolve_layout(descriptor)?;

    let host = host.ok_or(ConversionError::NoHostBuffer)?;
    if host.len() < required {
        return Err(ConversionError::BufferTooSmall {
            required,
            actual: host.len(),
        });
    }

    Ok(MatView::new(
        descriptor.width,
        descriptor.height,
        cv_type,
        descriptor.step,
        &host[..required],
    ))
}

/// Pointer-based variant of [`map`] for buffers handed over through FFI.
///
/// A null `ptr` yields `NoHostBuffer` without being dereferenced.
///
/// # Safety
///
/// A non-null `ptr` must point to at least `step * (height - 1) + width * elem_size`
/// readable bytes that stay valid and unmodified for `'a`.
pub unsafe fn map_raw<'a>(descriptor: &ImageDescriptor, ptr: *const u8) -> Result<MatView<'a>> {
    let (_, required) = resolve_layout(descriptor)?;

    if ptr.is_null() {
        return Err(ConversionError::NoHostBuffer);
    }

    // SAFETY: non-null and, per the caller contract, valid for `required` bytes over 'a.
    let host = unsafe { std::slice::from_raw_parts(ptr, required) };
    map(descriptor, Some(host))
}

/// Views a captured frame as an OpenCV matrix sharing the frame's host memory.
pub fn source_to_view(mat: &SourceMat) -> Result<MatView<'_>> {
    let view = map(mat.descriptor(), mat.host_data())?;
    debug!(
        width = view.width(),
        height = view.height(),
        cv_type = %view.cv_type(),
        step = view.step(),
        "Mapped source mat"
    );
    Ok(view)
}
