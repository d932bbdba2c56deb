//! Pipeline configuration
//!
//! Every table the pipeline consumes (color weights, offsets, level shift and
//! quantization matrices) lives in a [`CodecConfig`] value that is handed to the
//! encoder and decoder explicitly.

use crate::consts::*;
use crate::{CodecError, CodecResult};

/// Linear RGB -> luma/chroma transform: `out[c] = weights[c] · rgb + offsets[c]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTransform {
    pub weights: [[f64; 3]; 3],
    pub offsets: [f64; 3],
}

impl ColorTransform {
    /// Canonical luma/chroma weights with chroma centered at mid-range of `max_value`
    pub fn for_max_value(max_value: u16) -> Self {
        let mid = mid_range(max_value);
        Self {
            weights: [DEFAULT_Y_WEIGHTS, DEFAULT_CB_WEIGHTS, DEFAULT_CR_WEIGHTS],
            offsets: [0.0, mid, mid],
        }
    }
}

impl Default for ColorTransform {
    fn default() -> Self {
        Self::for_max_value(DEFAULT_MAX_VALUE)
    }
}

/// 8x8 matrix of positive quantization divisors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantMatrix {
    rows: [[u16; BLOCK_SIZE]; BLOCK_SIZE],
}

impl QuantMatrix {
    pub fn new(rows: [[u16; BLOCK_SIZE]; BLOCK_SIZE]) -> CodecResult<Self> {
        let matrix = Self { rows };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Standard luminance table
    pub fn luma() -> Self {
        Self {
            rows: DEFAULT_LUMA_TABLE,
        }
    }

    /// Standard chrominance table
    pub fn chroma() -> Self {
        Self {
            rows: DEFAULT_CHROMA_TABLE,
        }
    }

    /// Every divisor set to `value`
    pub fn uniform(value: u16) -> CodecResult<Self> {
        Self::new([[value; BLOCK_SIZE]; BLOCK_SIZE])
    }

    pub fn rows(&self) -> &[[u16; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.rows
    }

    /// Divisor at a row-major block index
    #[inline]
    pub fn get(&self, index: usize) -> u16 {
        self.rows[index / BLOCK_SIZE][index % BLOCK_SIZE]
    }

    fn validate(&self) -> CodecResult<()> {
        match self.rows.iter().flatten().position(|&q| q == 0) {
            Some(index) => Err(CodecError::InvalidParameter(format!(
                "quantization divisor at ({}, {}) must be positive",
                index / BLOCK_SIZE,
                index % BLOCK_SIZE
            ))),
            None => Ok(()),
        }
    }
}

/// Complete encoder/decoder configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecConfig {
    /// RGB -> luma/chroma weights and offsets
    pub color: ColorTransform,
    /// Added to every channel after color conversion
    pub level_shift: f64,
    /// One quantization matrix per channel, in channel order
    pub quant: [QuantMatrix; NUM_CHANNELS],
    /// Largest raster sample value; decoded samples are clamped to it
    pub max_value: u16,
}

impl CodecConfig {
    /// Canonical configuration for rasters with samples in `[0, max_value]`
    pub fn for_max_value(max_value: u16) -> Self {
        Self {
            color: ColorTransform::for_max_value(max_value),
            level_shift: -mid_range(max_value),
            quant: [QuantMatrix::luma(), QuantMatrix::chroma(), QuantMatrix::chroma()],
            max_value,
        }
    }

    pub fn with_quant_tables(mut self, quant: [QuantMatrix; NUM_CHANNELS]) -> Self {
        self.quant = quant;
        self
    }

    pub fn with_color_transform(mut self, color: ColorTransform) -> Self {
        self.color = color;
        self
    }

    pub fn with_level_shift(mut self, level_shift: f64) -> Self {
        self.level_shift = level_shift;
        self
    }

    /// Check values a caller may have set directly on the public fields
    pub fn validate(&self) -> CodecResult<()> {
        if self.max_value == 0 {
            return Err(CodecError::InvalidParameter(
                "max_value must be positive".to_string(),
            ));
        }
        if !self.level_shift.is_finite()
            || self.color.weights.iter().flatten().any(|w| !w.is_finite())
            || self.color.offsets.iter().any(|o| !o.is_finite())
        {
            return Err(CodecError::InvalidParameter(
                "color transform and level shift must be finite".to_string(),
            ));
        }
        for table in &self.quant {
            table.validate()?;
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::for_max_value(DEFAULT_MAX_VALUE)
    }
}

fn mid_range(max_value: u16) -> f64 {
    (f64::from(max_value) + 1.0) / 2.0
}
