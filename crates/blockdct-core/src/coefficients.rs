//! Quantized, zigzag-ordered representation of an image

use crate::consts::{BLOCK_SIZE, NUM_CHANNELS};
use crate::{ChannelBlocks, CodecError, CodecResult, Dimensions, ZigzagVector};

/// Resolve a row-major block index to its (column, row) grid position
pub fn locate_block(index: usize, blocks_x: usize, blocks_y: usize) -> CodecResult<(usize, usize)> {
    if index >= blocks_x.saturating_mul(blocks_y) {
        return Err(CodecError::BlockIndexOutOfBounds {
            index,
            blocks_x,
            blocks_y,
        });
    }
    Ok((index % blocks_x, index / blocks_x))
}

/// Encoder output: one zigzag vector per block, per channel
///
/// `dimensions` are those of the source raster. Only whole 8x8 blocks are
/// represented, so the block grid may cover less than the full image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientImage {
    pub dimensions: Dimensions,
    pub blocks_x: usize,
    pub blocks_y: usize,
    /// Per channel, the block vectors in row-major grid order
    pub channels: [Vec<ZigzagVector>; NUM_CHANNELS],
}

impl CoefficientImage {
    pub fn new(
        dimensions: Dimensions,
        channels: [Vec<ZigzagVector>; NUM_CHANNELS],
    ) -> CodecResult<Self> {
        let (blocks_x, blocks_y) = dimensions.block_grid(BLOCK_SIZE);
        let image = Self {
            dimensions,
            blocks_x,
            blocks_y,
            channels,
        };
        image.validate()?;
        Ok(image)
    }

    /// Check that the block grid matches `dimensions` and every channel holds
    /// one vector per block
    ///
    /// The fields are public, so consumers re-check before indexing.
    pub fn validate(&self) -> CodecResult<()> {
        let grid = self.dimensions.block_grid(BLOCK_SIZE);
        if (self.blocks_x, self.blocks_y) != grid {
            return Err(CodecError::InvalidCoefficients(format!(
                "{}x{} block grid does not match a {}x{} image ({}x{} blocks)",
                self.blocks_x,
                self.blocks_y,
                self.dimensions.width,
                self.dimensions.height,
                grid.0,
                grid.1
            )));
        }

        let expected = self.block_count();
        for (c, channel) in self.channels.iter().enumerate() {
            if channel.len() != expected {
                return Err(CodecError::InvalidCoefficients(format!(
                    "channel {} holds {} blocks, a {}x{} image needs {}",
                    c,
                    channel.len(),
                    self.dimensions.width,
                    self.dimensions.height,
                    expected
                )));
            }
        }
        Ok(())
    }

    pub fn block_count(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    /// Zigzag vectors of every channel for the block at a row-major index
    pub fn block(&self, index: usize) -> CodecResult<ChannelBlocks<&ZigzagVector>> {
        self.validate()?;
        locate_block(index, self.blocks_x, self.blocks_y)?;
        Ok(std::array::from_fn(|c| &self.channels[c][index]))
    }
}
