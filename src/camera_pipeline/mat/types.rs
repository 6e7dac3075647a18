//! Camera SDK buffer types

use std::fmt;

/// Numeric representation of one channel sample as reported by the camera SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer (depth maps on newer firmware)
    U16,
    /// 32-bit float
    F32,
}

impl ElementType {
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementType::U8 => 1,
            ElementType::U16 => 2,
            ElementType::F32 => 4,
        }
    }
}

/// Element type plus interleaved channel count, e.g. `U8_C4` for BGRA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatType {
    pub element: ElementType,
    pub channels: u8,
}

impl MatType {
    pub const F32_C1: MatType = MatType::new(ElementType::F32, 1);
    pub const F32_C2: MatType = MatType::new(ElementType::F32, 2);
    pub const F32_C3: MatType = MatType::new(ElementType::F32, 3);
    pub const F32_C4: MatType = MatType::new(ElementType::F32, 4);
    pub const U8_C1: MatType = MatType::new(ElementType::U8, 1);
    pub const U8_C2: MatType = MatType::new(ElementType::U8, 2);
    pub const U8_C3: MatType = MatType::new(ElementType::U8, 3);
    pub const U8_C4: MatType = MatType::new(ElementType::U8, 4);
    pub const U16_C1: MatType = MatType::new(ElementType::U16, 1);

    pub const fn new(element: ElementType, channels: u8) -> Self {
        Self { element, channels }
    }

    /// Bytes per pixel
    pub const fn pixel_size(self) -> usize {
        self.element.size_bytes() * self.channels as usize
    }
}

impl fmt::Display for MatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}_C{}", self.element, self.channels)
    }
}

/// Where a buffer's pixel data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryLocation {
    /// Host RAM, directly addressable by the CPU
    Cpu,
    /// Accelerator memory only
    Gpu,
    /// Mirrored in both host and accelerator memory
    Both,
}

impl MemoryLocation {
    pub fn has_host(self) -> bool {
        matches!(self, MemoryLocation::Cpu | MemoryLocation::Both)
    }

    pub fn has_device(self) -> bool {
        matches!(self, MemoryLocation::Gpu | MemoryLocation::Both)
    }
}

/// Geometry and type of a frame buffer, independent of where its memory lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    pub mat_type: MatType,
    /// Row stride in bytes
    pub step: usize,
}

impl ImageDescriptor {
    /// Descriptor for a buffer whose rows are tightly packed.
    pub fn packed(width: usize, height: usize, mat_type: MatType) -> Self {
        Self {
            width,
            height,
            mat_type,
            step: width.saturating_mul(mat_type.pixel_size()),
        }
    }
}
