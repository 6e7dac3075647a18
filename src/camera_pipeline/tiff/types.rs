//! TIFF export configuration types

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// Configuration for frame export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing).
    /// Only applied to 8-bit frames.
    pub predictor: Option<u16>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Default)]
pub struct ExportConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl ExportConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
