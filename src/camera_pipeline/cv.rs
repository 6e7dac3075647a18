//! Vision-library side of the bridge
//!
//! OpenCV type codes and a borrowed, non-owning view shaped like a `cv::Mat`
//! header over someone else's pixel memory.

pub mod types;
mod view;

pub use types::{CvDepth, CvType};
pub use view::MatView;
