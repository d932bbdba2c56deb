//! Block transform decoder
//!
//! Zigzag vectors → dequantize → inverse DCT → merge blocks → undo level
//! shift → RGB. The reconstructed raster covers the block grid only; strips
//! the encoder dropped are not recreated.

use blockdct_color::{level_unshift, ColorConverter};
use blockdct_core::consts::BLOCK_SIZE;
use blockdct_core::*;
use blockdct_transform::{dequantize_block, inverse_dct_block, merge_channels, unzigzag_block, BlockGrid};
use rayon::prelude::*;
use tracing::debug;

/// Block transform decoder
#[derive(Debug, Clone)]
pub struct Decoder {
    config: CodecConfig,
    converter: ColorConverter,
}

impl Decoder {
    pub fn new(config: CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        let converter = ColorConverter::new(config.color)?;
        Ok(Self { config, converter })
    }

    /// Decoder with the canonical configuration for rasters of the given maxval
    pub fn for_max_value(max_value: u16) -> CodecResult<Self> {
        Self::new(CodecConfig::for_max_value(max_value))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Reconstruct a raster from coefficient vectors
    pub fn decode(&self, coefficients: &CoefficientImage) -> CodecResult<RasterImage> {
        coefficients.validate()?;
        let (blocks_x, blocks_y) = (coefficients.blocks_x, coefficients.blocks_y);
        let dimensions = Dimensions::new(
            (blocks_x * BLOCK_SIZE) as u32,
            (blocks_y * BLOCK_SIZE) as u32,
        );
        if coefficients.block_count() == 0 {
            return Err(CodecError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let vectors: Vec<ChannelBlocks<ZigzagVector>> = (0..coefficients.block_count())
            .into_par_iter()
            .map(|i| std::array::from_fn(|c| coefficients.channels[c][i]))
            .collect();
        let grid = BlockGrid::new(blocks_x, blocks_y, vectors)?;

        let samples = grid.map(|vectors| {
            let levels = unzigzag_block(vectors);
            inverse_dct_block(&dequantize_block(&levels, &self.config.quant))
        });
        debug!(blocks_x, blocks_y, "reconstructed blocks");

        let planes = merge_channels(&samples)?;
        let unshifted = level_unshift(&planes, self.config.level_shift);
        let rgb = self.converter.inverse_planes(&unshifted);

        RasterImage::from_f64_samples(dimensions, self.config.max_value, &rgb)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            config: CodecConfig::default(),
            converter: ColorConverter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dc_only(width: u32, height: u32, dc: [i32; 3]) -> CoefficientImage {
        let (bx, by) = Dimensions::new(width, height).block_grid(BLOCK_SIZE);
        let channels = std::array::from_fn(|c| {
            let mut v = [0i32; 64];
            v[0] = dc[c];
            vec![v; bx * by]
        });
        CoefficientImage::new(Dimensions::new(width, height), channels).unwrap()
    }

    #[test]
    fn test_zero_levels_decode_to_mid_gray() {
        let image = Decoder::default().decode(&dc_only(16, 8, [0, 0, 0])).unwrap();

        assert_eq!(image.dimensions, Dimensions::new(16, 8));
        assert_eq!(image.buffer, SampleBuffer::U8(vec![128; 16 * 8 * 3]));
    }

    #[test]
    fn test_dc_level_sets_flat_luma() {
        // DC 36 * 16 = 576 → 72 per sample → Y = 200
        let image = Decoder::default().decode(&dc_only(8, 8, [36, 0, 0])).unwrap();
        assert_eq!(image.buffer, SampleBuffer::U8(vec![200; 64 * 3]));
    }

    #[test]
    fn test_output_is_clamped() {
        let image = Decoder::default().decode(&dc_only(8, 8, [200, 0, 0])).unwrap();
        assert_eq!(image.buffer, SampleBuffer::U8(vec![255; 64 * 3]));

        let image = Decoder::default().decode(&dc_only(8, 8, [-200, 0, 0])).unwrap();
        assert_eq!(image.buffer, SampleBuffer::U8(vec![0; 64 * 3]));
    }

    #[test]
    fn test_decoded_size_covers_block_grid() {
        let image = Decoder::default().decode(&dc_only(21, 9, [0, 0, 0])).unwrap();
        assert_eq!(image.dimensions, Dimensions::new(16, 8));
    }

    #[test]
    fn test_empty_grid_is_an_error() {
        let result = Decoder::default().decode(&dc_only(7, 30, [0, 0, 0]));
        assert!(matches!(
            result,
            Err(CodecError::InvalidDimensions {
                width: 0,
                height: 24
            })
        ));
    }

    #[test]
    fn test_inconsistent_coefficients_rejected() {
        let mut short_channel = dc_only(16, 16, [0, 0, 0]);
        short_channel.channels[2].pop();

        let mut wide_grid = dc_only(16, 16, [0, 0, 0]);
        wide_grid.blocks_x = 4;

        for coefficients in [short_channel, wide_grid] {
            assert!(matches!(
                Decoder::default().decode(&coefficients),
                Err(CodecError::InvalidCoefficients(_))
            ));
        }
    }

    #[test]
    fn test_sixteen_bit_output() {
        let decoder = Decoder::for_max_value(4095).unwrap();
        let image = decoder.decode(&dc_only(8, 8, [0, 0, 0])).unwrap();
        assert_eq!(image.pixel_type(), PixelType::U16);
        assert_eq!(image.buffer, SampleBuffer::U16(vec![2048; 64 * 3]));
    }
}
