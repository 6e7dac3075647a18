use crate::camera_pipeline::cv::types::{CvDepth, CvType};

/// Borrowed `cv::Mat`-style header over pixel memory owned elsewhere.
///
/// The view never allocates or frees pixel data. Its lifetime is bound to the
/// owner's borrow, so the owner cannot be refilled or dropped while the view
/// is in use.
#[derive(Debug, Clone, Copy)]
pub struct MatView<'a> {
    width: usize,
    height: usize,
    cv_type: CvType,
    step: usize,
    data: &'a [u8],
}

impl<'a> MatView<'a> {
    /// `data` must hold at least `step * (height - 1) + width * elem_size` bytes;
    /// the mapper checks this before constructing a view.
    pub(crate) fn new(width: usize, height: usize, cv_type: CvType, step: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            cv_type,
            step,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cv_type(&self) -> CvType {
        self.cv_type
    }

    /// Row stride in bytes
    pub fn step(&self) -> usize {
        self.step
    }

    /// Address of the first pixel, identical to the owner's host pointer.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// The full borrowed region, including any row padding.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// True when rows are tightly packed with no padding between them.
    pub fn is_continuous(&self) -> bool {
        self.height == 1 || self.step == self.width * self.cv_type.elem_size()
    }

    /// Pixel bytes of row `y`, excluding padding.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.step;
        self.data.get(start..start + self.width * self.cv_type.elem_size())
    }

    /// Raw bytes of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&'a [u8]> {
        if x >= self.width {
            return None;
        }
        let elem = self.cv_type.elem_size();
        self.row(y)?.get(x * elem..(x + 1) * elem)
    }

    /// Channel values of a `CV_32F*` pixel, decoded from native byte order.
    pub fn pixel_f32(&self, x: usize, y: usize) -> Option<Vec<f32>> {
        if self.cv_type.depth() != CvDepth::F32 {
            return None;
        }
        let bytes = self.pixel(x, y)?;
        Some(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        )
    }
}
