//! Quantization for lossy compression
//!
//! Forward quantization divides each coefficient by its matrix entry and rounds
//! half to even; it is the only lossy stage of the pipeline.

use blockdct_core::consts::{BLOCK_AREA, NUM_CHANNELS};
use blockdct_core::{ChannelBlocks, LevelBlock, QuantMatrix, SampleBlock};

/// Quantize DCT coefficients
pub fn quantize(coeffs: &SampleBlock, table: &QuantMatrix, output: &mut LevelBlock) {
    for i in 0..BLOCK_AREA {
        let q = f64::from(table.get(i));
        output[i] = (coeffs[i] / q).round_ties_even() as i32;
    }
}

/// Dequantize levels back to approximate DCT coefficients
pub fn dequantize(levels: &LevelBlock, table: &QuantMatrix, output: &mut SampleBlock) {
    for i in 0..BLOCK_AREA {
        output[i] = f64::from(levels[i]) * f64::from(table.get(i));
    }
}

/// Quantize each channel of an 8x8x3 coefficient block with its own table
pub fn quantize_block(
    block: &ChannelBlocks<SampleBlock>,
    tables: &[QuantMatrix; NUM_CHANNELS],
) -> ChannelBlocks<LevelBlock> {
    let mut out = [[0; BLOCK_AREA]; NUM_CHANNELS];
    for c in 0..NUM_CHANNELS {
        quantize(&block[c], &tables[c], &mut out[c]);
    }
    out
}

/// Dequantize each channel of an 8x8x3 level block with its own table
pub fn dequantize_block(
    block: &ChannelBlocks<LevelBlock>,
    tables: &[QuantMatrix; NUM_CHANNELS],
) -> ChannelBlocks<SampleBlock> {
    let mut out = [[0.0; BLOCK_AREA]; NUM_CHANNELS];
    for c in 0..NUM_CHANNELS {
        dequantize(&block[c], &tables[c], &mut out[c]);
    }
    out
}
