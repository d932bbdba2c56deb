//! Block transform encoder
//!
//! RGB raster → YCbCr → level shift → 8x8 blocks → DCT → quantize → zigzag.

use blockdct_color::{level_shift, ColorConverter};
use blockdct_core::consts::BLOCK_SIZE;
use blockdct_core::*;
use blockdct_transform::{forward_dct_block, quantize_block, split_channels, zigzag_block, BlockGrid};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Block transform encoder
#[derive(Debug, Clone)]
pub struct Encoder {
    config: CodecConfig,
    converter: ColorConverter,
}

impl Encoder {
    pub fn new(config: CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        let converter = ColorConverter::new(config.color)?;
        Ok(Self { config, converter })
    }

    /// Encoder with the canonical configuration for rasters of the given maxval
    pub fn for_max_value(max_value: u16) -> CodecResult<Self> {
        Self::new(CodecConfig::for_max_value(max_value))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a raster into per-channel zigzag vectors
    pub fn encode(&self, image: &RasterImage) -> CodecResult<CoefficientImage> {
        let grid = self.prepare_blocks(image)?;
        let vectors = grid.map(|block| zigzag_block(&self.quantize(block)));

        let channels = std::array::from_fn(|c| vectors.blocks.par_iter().map(|v| v[c]).collect());
        CoefficientImage::new(image.dimensions, channels)
    }

    /// Quantized 8x8x3 block (row-major levels) at a row-major block index
    pub fn quantized_block(
        &self,
        image: &RasterImage,
        index: usize,
    ) -> CodecResult<ChannelBlocks<LevelBlock>> {
        let (blocks_x, blocks_y) = image.dimensions.block_grid(BLOCK_SIZE);
        locate_block(index, blocks_x, blocks_y)?;

        let grid = self.prepare_blocks(image)?;
        Ok(self.quantize(grid.block(index)?))
    }

    /// Color conversion, level shift and block split
    fn prepare_blocks(
        &self,
        image: &RasterImage,
    ) -> CodecResult<BlockGrid<ChannelBlocks<SampleBlock>>> {
        if image.max_value != self.config.max_value {
            warn!(
                image_max = image.max_value,
                config_max = self.config.max_value,
                "raster maxval differs from codec configuration"
            );
        }

        let (width, height) = (image.width() as usize, image.height() as usize);
        if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
            warn!(
                width,
                height,
                "dimensions are not multiples of {}; partial edge blocks are dropped",
                BLOCK_SIZE
            );
        }

        let planes = self.converter.forward_image(image)?;
        let shifted = level_shift(&planes, self.config.level_shift);
        let grid = split_channels(&shifted);

        debug!(
            blocks_x = grid.blocks_x,
            blocks_y = grid.blocks_y,
            "split raster into blocks"
        );
        Ok(grid)
    }

    fn quantize(&self, block: &ChannelBlocks<SampleBlock>) -> ChannelBlocks<LevelBlock> {
        quantize_block(&forward_dct_block(block), &self.config.quant)
    }
}

impl Default for Encoder {
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

    fn flat_image(width: u32, height: u32, value: u8) -> RasterImage {
        let dims = Dimensions::new(width, height);
        RasterImage::from_buffer(
            dims,
            255,
            SampleBuffer::U8(vec![value; dims.pixel_count() * 3]),
        )
        .unwrap()
    }

    #[test]
    fn test_flat_gray_encodes_to_zero_levels() {
        // 128 gray is 0 in every channel after the level shift
        let encoded = Encoder::default().encode(&flat_image(16, 8, 128)).unwrap();

        assert_eq!((encoded.blocks_x, encoded.blocks_y), (2, 1));
        for channel in &encoded.channels {
            assert_eq!(channel.len(), 2);
            for vector in channel {
                assert!(vector.iter().all(|&v| v == 0));
            }
        }
    }

    #[test]
    fn test_flat_light_gray_dc_only() {
        let encoded = Encoder::default().encode(&flat_image(8, 8, 200)).unwrap();

        // Y = 200 → shifted 72 → DC 576 → 576 / 16 = 36
        let y = &encoded.channels[0][0];
        assert_eq!(y[0], 36);
        assert!(y[1..].iter().all(|&v| v == 0));

        // Gray input leaves chroma at the neutral offset
        for c in 1..3 {
            assert!(encoded.channels[c][0].iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_truncates_partial_blocks() {
        let encoded = Encoder::default().encode(&flat_image(20, 13, 90)).unwrap();
        assert_eq!(encoded.dimensions, Dimensions::new(20, 13));
        assert_eq!((encoded.blocks_x, encoded.blocks_y), (2, 1));
        assert_eq!(encoded.channels[0].len(), 2);
    }

    #[test]
    fn test_image_smaller_than_a_block() {
        let encoded = Encoder::default().encode(&flat_image(7, 7, 10)).unwrap();
        assert_eq!(encoded.block_count(), 0);
        assert!(encoded.channels.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_quantized_block_matches_encoded_vectors() {
        let dims = Dimensions::new(16, 16);
        let samples = (0..dims.pixel_count() * 3)
            .map(|i| ((i * 31) % 256) as u8)
            .collect();
        let image = RasterImage::from_buffer(dims, 255, SampleBuffer::U8(samples)).unwrap();

        let encoder = Encoder::default();
        let encoded = encoder.encode(&image).unwrap();

        for index in 0..4 {
            let levels = encoder.quantized_block(&image, index).unwrap();
            let vectors = encoded.block(index).unwrap();
            for c in 0..3 {
                assert_eq!(&zigzag_block(&levels)[c], vectors[c]);
            }
        }
    }

    #[test]
    fn test_quantized_block_out_of_range() {
        let result = Encoder::default().quantized_block(&flat_image(16, 16, 0), 4);
        assert!(matches!(
            result,
            Err(CodecError::BlockIndexOutOfBounds {
                index: 4,
                blocks_x: 2,
                blocks_y: 2
            })
        ));
    }

    #[test]
    fn test_rejects_singular_color_transform() {
        let color = ColorTransform {
            weights: [[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            offsets: [0.0; 3],
        };
        let config = CodecConfig::default().with_color_transform(color);
        assert!(matches!(
            Encoder::new(config),
            Err(CodecError::InvalidParameter(_))
        ));
    }
}
