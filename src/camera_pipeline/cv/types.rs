//! OpenCV element depth and type codes

use std::fmt;

/// Channel depth, with OpenCV's numeric depth constants as discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CvDepth {
    /// `CV_8U`
    U8 = 0,
    /// `CV_32F`
    F32 = 5,
}

impl CvDepth {
    pub const fn size_bytes(self) -> usize {
        match self {
            CvDepth::U8 => 1,
            CvDepth::F32 => 4,
        }
    }
}

const CV_CN_SHIFT: i32 = 3;

/// An OpenCV matrix type such as `CV_8UC4`.
///
/// Only the eight types reachable from the camera format table exist, so a
/// `CvType` is always one OpenCV can construct a `Mat` header for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CvType {
    depth: CvDepth,
    channels: u8,
}

impl CvType {
    pub const CV_8UC1: CvType = CvType { depth: CvDepth::U8, channels: 1 };
    pub const CV_8UC2: CvType = CvType { depth: CvDepth::U8, channels: 2 };
    pub const CV_8UC3: CvType = CvType { depth: CvDepth::U8, channels: 3 };
    pub const CV_8UC4: CvType = CvType { depth: CvDepth::U8, channels: 4 };
    pub const CV_32FC1: CvType = CvType { depth: CvDepth::F32, channels: 1 };
    pub const CV_32FC2: CvType = CvType { depth: CvDepth::F32, channels: 2 };
    pub const CV_32FC3: CvType = CvType { depth: CvDepth::F32, channels: 3 };
    pub const CV_32FC4: CvType = CvType { depth: CvDepth::F32, channels: 4 };

    pub const fn depth(self) -> CvDepth {
        self.depth
    }

    pub const fn channels(self) -> u8 {
        self.channels
    }

    /// Numeric type code as produced by `CV_MAKETYPE(depth, cn)`.
    pub const fn code(self) -> i32 {
        self.depth as i32 + ((self.channels as i32 - 1) << CV_CN_SHIFT)
    }

    /// Bytes per pixel (`Mat::elemSize`)
    pub const fn elem_size(self) -> usize {
        self.depth.size_bytes() * self.channels as usize
    }
}

impl fmt::Display for CvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = match self.depth {
            CvDepth::U8 => "8U",
            CvDepth::F32 => "32F",
        };
        write!(f, "CV_{}C{}", depth, self.channels)
    }
}
