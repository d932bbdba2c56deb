//! Block partitioning
//!
//! Planes are cut into non-overlapping blocks starting at the top-left corner.
//! Right and bottom strips narrower than a block are dropped, never padded, so
//! `merge(split(plane))` only reproduces planes whose dimensions are multiples
//! of the block size.

use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, NUM_CHANNELS};
use blockdct_core::*;
use rayon::prelude::*;

/// A row-major grid of equally-shaped blocks
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGrid<B> {
    pub blocks_x: usize,
    pub blocks_y: usize,
    pub blocks: Vec<B>,
}

impl<B> BlockGrid<B> {
    pub fn new(blocks_x: usize, blocks_y: usize, blocks: Vec<B>) -> CodecResult<Self> {
        if blocks.len() != blocks_x * blocks_y {
            return Err(CodecError::InvalidParameter(format!(
                "{} blocks cannot fill a {}x{} grid",
                blocks.len(),
                blocks_x,
                blocks_y
            )));
        }
        Ok(Self {
            blocks_x,
            blocks_y,
            blocks,
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block at grid column `bx`, row `by`
    pub fn get(&self, bx: usize, by: usize) -> Option<&B> {
        if bx < self.blocks_x && by < self.blocks_y {
            self.blocks.get(by * self.blocks_x + bx)
        } else {
            None
        }
    }

    /// Block at a row-major index
    pub fn block(&self, index: usize) -> CodecResult<&B> {
        locate_block(index, self.blocks_x, self.blocks_y)?;
        Ok(&self.blocks[index])
    }

    /// Apply `f` to every block in parallel, keeping grid order
    pub fn map<C, F>(&self, f: F) -> BlockGrid<C>
    where
        B: Sync,
        C: Send,
        F: Fn(&B) -> C + Sync + Send,
    {
        BlockGrid {
            blocks_x: self.blocks_x,
            blocks_y: self.blocks_y,
            blocks: self.blocks.par_iter().map(f).collect(),
        }
    }
}

/// Copy a `width`x`height` window at (x0, y0) out of a plane
fn extract_window(plane: &Plane, x0: usize, y0: usize, width: usize, height: usize) -> Vec<f64> {
    let mut window = Vec::with_capacity(width * height);
    for y in y0..y0 + height {
        let row = y * plane.width;
        window.extend_from_slice(&plane.samples[row + x0..row + x0 + width]);
    }
    window
}

/// Copy a `width`x`height` window into a plane at (x0, y0)
fn insert_window(plane: &mut Plane, window: &[f64], x0: usize, y0: usize, width: usize) {
    for (dy, src) in window.chunks_exact(width).enumerate() {
        let row = (y0 + dy) * plane.width;
        plane.samples[row + x0..row + x0 + width].copy_from_slice(src);
    }
}

/// Split a plane into blocks of arbitrary size
pub fn split_plane(
    plane: &Plane,
    block_width: usize,
    block_height: usize,
) -> CodecResult<BlockGrid<Plane>> {
    if block_width == 0 || block_height == 0 {
        return Err(CodecError::InvalidParameter(format!(
            "block size must be positive, got {}x{}",
            block_width, block_height
        )));
    }

    let blocks_x = plane.width / block_width;
    let blocks_y = plane.height / block_height;
    let mut blocks = Vec::with_capacity(blocks_x * blocks_y);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            blocks.push(Plane {
                width: block_width,
                height: block_height,
                samples: extract_window(
                    plane,
                    bx * block_width,
                    by * block_height,
                    block_width,
                    block_height,
                ),
            });
        }
    }

    BlockGrid::new(blocks_x, blocks_y, blocks)
}

/// Reassemble a plane from a grid of equally-shaped blocks
pub fn merge_blocks(grid: &BlockGrid<Plane>) -> CodecResult<Plane> {
    let Some(first) = grid.blocks.first() else {
        return Ok(Plane::new(0, 0));
    };
    let (block_width, block_height) = (first.width, first.height);

    if grid
        .blocks
        .iter()
        .any(|b| b.width != block_width || b.height != block_height)
    {
        return Err(CodecError::InvalidParameter(
            "all blocks of a grid must share one shape".to_string(),
        ));
    }

    let mut plane = Plane::new(grid.blocks_x * block_width, grid.blocks_y * block_height);
    for (index, block) in grid.blocks.iter().enumerate() {
        let (bx, by) = (index % grid.blocks_x, index / grid.blocks_x);
        insert_window(
            &mut plane,
            &block.samples,
            bx * block_width,
            by * block_height,
            block_width,
        );
    }
    Ok(plane)
}

/// Split a plane into 8x8 blocks
pub fn split_plane_8x8(plane: &Plane) -> BlockGrid<SampleBlock> {
    let blocks_x = plane.width / BLOCK_SIZE;
    let blocks_y = plane.height / BLOCK_SIZE;

    let blocks = (0..blocks_x * blocks_y)
        .map(|index| {
            let (bx, by) = (index % blocks_x, index / blocks_x);
            let window = extract_window(plane, bx * BLOCK_SIZE, by * BLOCK_SIZE, BLOCK_SIZE, BLOCK_SIZE);
            let mut block = [0.0; BLOCK_AREA];
            block.copy_from_slice(&window);
            block
        })
        .collect();

    BlockGrid {
        blocks_x,
        blocks_y,
        blocks,
    }
}

/// Reassemble a plane from a grid of 8x8 blocks
pub fn merge_blocks_8x8(grid: &BlockGrid<SampleBlock>) -> Plane {
    let mut plane = Plane::new(grid.blocks_x * BLOCK_SIZE, grid.blocks_y * BLOCK_SIZE);
    for (index, block) in grid.blocks.iter().enumerate() {
        let (bx, by) = (index % grid.blocks_x, index / grid.blocks_x);
        insert_window(&mut plane, block, bx * BLOCK_SIZE, by * BLOCK_SIZE, BLOCK_SIZE);
    }
    plane
}

/// Split all three channels into one grid of 8x8x3 blocks
pub fn split_channels(channels: &ChannelTriple) -> BlockGrid<ChannelBlocks<SampleBlock>> {
    let grids: [BlockGrid<SampleBlock>; NUM_CHANNELS] =
        std::array::from_fn(|c| split_plane_8x8(&channels.planes[c]));

    let blocks = (0..grids[0].len())
        .map(|i| std::array::from_fn(|c| grids[c].blocks[i]))
        .collect();

    BlockGrid {
        blocks_x: grids[0].blocks_x,
        blocks_y: grids[0].blocks_y,
        blocks,
    }
}

/// Reassemble three channel planes from a grid of 8x8x3 blocks
pub fn merge_channels(grid: &BlockGrid<ChannelBlocks<SampleBlock>>) -> CodecResult<ChannelTriple> {
    let planes = std::array::from_fn(|c| {
        merge_blocks_8x8(&BlockGrid {
            blocks_x: grid.blocks_x,
            blocks_y: grid.blocks_y,
            blocks: grid.blocks.iter().map(|b| b[c]).collect(),
        })
    });
    ChannelTriple::new(planes)
}
