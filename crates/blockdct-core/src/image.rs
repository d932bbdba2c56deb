//! Raster image data structures

use crate::consts::{MAX_SAMPLE_VALUE, NUM_CHANNELS};
use crate::{CodecError, CodecResult, Dimensions, PixelType, Sample};

/// Interleaved RGB sample storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl SampleBuffer {
    pub fn new(pixel_type: PixelType, size: usize) -> Self {
        match pixel_type {
            PixelType::U8 => SampleBuffer::U8(vec![0; size]),
            PixelType::U16 => SampleBuffer::U16(vec![0; size]),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::U8(v) => v.len(),
            SampleBuffer::U16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pixel_type(&self) -> PixelType {
        match self {
            SampleBuffer::U8(_) => PixelType::U8,
            SampleBuffer::U16(_) => PixelType::U16,
        }
    }

    /// Sample at a flat interleaved index, widened to f64
    pub fn get(&self, index: usize) -> f64 {
        match self {
            SampleBuffer::U8(v) => v[index].as_f64(),
            SampleBuffer::U16(v) => v[index].as_f64(),
        }
    }

    /// All samples widened to f64, in storage order
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            SampleBuffer::U8(v) => v.iter().map(|s| s.as_f64()).collect(),
            SampleBuffer::U16(v) => v.iter().map(|s| s.as_f64()).collect(),
        }
    }
}

/// Rounds and clamps real-valued samples into an integer sample type
pub fn samples_from_f64<T: Sample>(values: &[f64], max_value: u16) -> Vec<T> {
    values.iter().map(|&v| T::from_f64(v, max_value)).collect()
}

/// A three-channel raster with interleaved, row-major samples in `[0, max_value]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub dimensions: Dimensions,
    pub max_value: u16,
    pub buffer: SampleBuffer,
}

impl RasterImage {
    /// Create a zero-filled raster
    pub fn new(dimensions: Dimensions, max_value: u16) -> CodecResult<Self> {
        let size = Self::check_header(dimensions, max_value)?;
        let buffer = SampleBuffer::new(PixelType::for_max_value(max_value), size);

        Ok(Self {
            dimensions,
            max_value,
            buffer,
        })
    }

    /// Wrap an existing sample buffer, checking its length and storage type
    pub fn from_buffer(
        dimensions: Dimensions,
        max_value: u16,
        buffer: SampleBuffer,
    ) -> CodecResult<Self> {
        let expected = Self::check_header(dimensions, max_value)?;
        if buffer.len() != expected {
            return Err(CodecError::BufferTooSmall {
                expected,
                actual: buffer.len(),
            });
        }

        if buffer.pixel_type() != PixelType::for_max_value(max_value) {
            return Err(CodecError::InvalidParameter(format!(
                "{:?} storage cannot represent maxval {}",
                buffer.pixel_type(),
                max_value
            )));
        }

        Ok(Self {
            dimensions,
            max_value,
            buffer,
        })
    }

    /// Build a raster from real-valued interleaved samples, rounding and clamping each
    pub fn from_f64_samples(
        dimensions: Dimensions,
        max_value: u16,
        samples: &[f64],
    ) -> CodecResult<Self> {
        let buffer = match PixelType::for_max_value(max_value) {
            PixelType::U8 => SampleBuffer::U8(samples_from_f64(samples, max_value)),
            PixelType::U16 => SampleBuffer::U16(samples_from_f64(samples, max_value)),
        };
        Self::from_buffer(dimensions, max_value, buffer)
    }

    /// Validate the header and return the interleaved sample count
    fn check_header(dimensions: Dimensions, max_value: u16) -> CodecResult<usize> {
        let invalid = CodecError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        };
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(invalid);
        }
        let Some(samples) = dimensions.checked_sample_count() else {
            return Err(invalid);
        };
        if max_value == 0 {
            return Err(CodecError::InvalidParameter(format!(
                "maxval must be in 1..={}, got 0",
                MAX_SAMPLE_VALUE
            )));
        }
        Ok(samples)
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn pixel_type(&self) -> PixelType {
        self.buffer.pixel_type()
    }

    /// Sample of `channel` at pixel (x, y)
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> f64 {
        let index = (y * self.width() as usize + x) * NUM_CHANNELS + channel;
        self.buffer.get(index)
    }
}
