//! Format conversions module
//!
//! This module maps camera buffers onto the vision library's type vocabulary.

mod mat_to_cv;

#[cfg(test)]
mod tests;

pub use mat_to_cv::{map, map_raw, resolve_cv_type, source_to_view};
