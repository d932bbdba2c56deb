//! Core types for the block transform pipeline

use crate::consts::{BLOCK_AREA, NUM_CHANNELS};
use num_traits::{NumCast, Zero};

/// Sample storage type of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    /// 8-bit unsigned integer (maxval < 256)
    U8,
    /// 16-bit unsigned integer
    U16,
}

impl PixelType {
    /// Returns the size in bytes of one sample
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            PixelType::U8 => 1,
            PixelType::U16 => 2,
        }
    }

    /// Pick the storage type able to hold samples up to `max_value`
    pub fn for_max_value(max_value: u16) -> Self {
        if max_value < 256 {
            PixelType::U8
        } else {
            PixelType::U16
        }
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel count, saturating at `usize::MAX`
    pub fn pixel_count(&self) -> usize {
        self.checked_pixel_count().unwrap_or(usize::MAX)
    }

    /// Pixel count, or `None` when it does not fit in `usize`
    pub fn checked_pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Interleaved sample count for `NUM_CHANNELS` channels, or `None` on overflow
    pub fn checked_sample_count(&self) -> Option<usize> {
        self.checked_pixel_count()?.checked_mul(NUM_CHANNELS)
    }

    /// Number of whole blocks along each axis; partial strips are not counted
    pub fn block_grid(&self, block_size: usize) -> (usize, usize) {
        (
            self.width as usize / block_size,
            self.height as usize / block_size,
        )
    }
}

/// One channel of an 8x8 block in row-major order
pub type SampleBlock = [f64; BLOCK_AREA];

/// One channel of a quantized 8x8 block in row-major order
pub type LevelBlock = [i32; BLOCK_AREA];

/// Quantized levels of one channel block in zigzag order
pub type ZigzagVector = [i32; BLOCK_AREA];

/// An 8x8 block across all three channels
pub type ChannelBlocks<T> = [T; NUM_CHANNELS];

/// Integer raster sample
pub trait Sample: Copy + NumCast + Zero + PartialOrd + Send + Sync {
    /// Largest value the storage type can hold
    const MAX: f64;

    fn as_f64(self) -> f64 {
        num_traits::cast(self).unwrap_or(0.0)
    }

    /// Round to the nearest integer and clamp into `[0, max_value]`
    fn from_f64(value: f64, max_value: u16) -> Self {
        let upper = Self::MAX.min(<f64 as From<u16>>::from(max_value));
        num_traits::cast(value.round().clamp(0.0, upper)).unwrap_or_else(Self::zero)
    }
}

impl Sample for u8 {
    const MAX: f64 = 255.0;
}

impl Sample for u16 {
    const MAX: f64 = 65535.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_grid_truncates() {
        assert_eq!(Dimensions::new(16, 16).block_grid(8), (2, 2));
        assert_eq!(Dimensions::new(17, 23).block_grid(8), (2, 2));
        assert_eq!(Dimensions::new(7, 64).block_grid(8), (0, 8));
    }

    #[test]
    fn test_sample_from_f64_clamps() {
        assert_eq!(u8::from_f64(-3.2, 255), 0);
        assert_eq!(u8::from_f64(254.6, 255), 255);
        assert_eq!(u8::from_f64(300.0, 255), 255);
        assert_eq!(u8::from_f64(120.0, 100), 100);
        assert_eq!(u16::from_f64(1023.4, 1023), 1023);
        assert_eq!(u8::from_f64(f64::NAN, 255), 0);
    }

    #[test]
    fn test_pixel_type_for_max_value() {
        assert_eq!(PixelType::for_max_value(255), PixelType::U8);
        assert_eq!(PixelType::for_max_value(256), PixelType::U16);
        assert_eq!(PixelType::U16.bytes_per_sample(), 2);
    }

    #[test]
    fn test_pixel_count_overflow() {
        let huge = Dimensions::new(u32::MAX, u32::MAX);
        assert_eq!(Dimensions::new(640, 480).checked_sample_count(), Some(640 * 480 * 3));
        assert_eq!(huge.checked_sample_count(), None);
        if usize::BITS == 64 {
            let expected = <u64 as From<u32>>::from(u32::MAX).pow(2);
            assert_eq!(huge.checked_pixel_count().map(|n| n as u64), Some(expected));
        } else {
            assert_eq!(huge.checked_pixel_count(), None);
            assert_eq!(huge.pixel_count(), usize::MAX);
        }
    }
}
