//! Separable 8x8 DCT
//!
//! The 2D DCT is computed as two 1D passes (rows, then columns) against a
//! precomputed orthonormal basis `B[k][n] = scale(k) / 2 · cos((2n + 1)kπ / 16)`,
//! i.e. `C = B · S · Bᵀ` forward and `S = Bᵀ · C · B` inverse. Same values as
//! [`crate::dct8x8_forward_reference`] in O(N^3) per block.

use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, NUM_CHANNELS};
use blockdct_core::{ChannelBlocks, SampleBlock};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

const N: usize = BLOCK_SIZE;

lazy_static::lazy_static! {
    static ref BASIS: [[f64; N]; N] = {
        let mut table = [[0.0f64; N]; N];
        for (k, row) in table.iter_mut().enumerate() {
            let scale = if k == 0 { FRAC_1_SQRT_2 } else { 1.0 };
            for (n, entry) in row.iter_mut().enumerate() {
                let angle = ((2 * n + 1) * k) as f64 * PI / 16.0;
                *entry = scale * 0.5 * angle.cos();
            }
        }
        table
    };
}

/// 1D DCT-II on 8 samples
#[inline]
fn dct_1d_forward(input: &[f64; N], output: &mut [f64; N]) {
    for (k, out) in output.iter_mut().enumerate() {
        *out = BASIS[k].iter().zip(input.iter()).map(|(b, x)| b * x).sum();
    }
}

/// 1D DCT-III on 8 coefficients
#[inline]
fn dct_1d_inverse(input: &[f64; N], output: &mut [f64; N]) {
    for (n, out) in output.iter_mut().enumerate() {
        *out = (0..N).map(|k| BASIS[k][n] * input[k]).sum();
    }
}

/// Run `pass` over every row, then every column, of an 8x8 block
fn separable_2d(input: &SampleBlock, output: &mut SampleBlock, pass: fn(&[f64; N], &mut [f64; N])) {
    let mut temp = [0.0f64; BLOCK_AREA];
    let mut line = [0.0f64; N];
    let mut transformed = [0.0f64; N];

    for y in 0..N {
        line.copy_from_slice(&input[y * N..(y + 1) * N]);
        pass(&line, &mut transformed);
        temp[y * N..(y + 1) * N].copy_from_slice(&transformed);
    }

    for x in 0..N {
        for y in 0..N {
            line[y] = temp[y * N + x];
        }
        pass(&line, &mut transformed);
        for y in 0..N {
            output[y * N + x] = transformed[y];
        }
    }
}

/// 8x8 DCT-II (forward transform)
pub fn dct8x8_forward(input: &SampleBlock, output: &mut SampleBlock) {
    separable_2d(input, output, dct_1d_forward);
}

/// 8x8 DCT-III (inverse transform)
pub fn dct8x8_inverse(input: &SampleBlock, output: &mut SampleBlock) {
    separable_2d(input, output, dct_1d_inverse);
}

/// Forward DCT of each channel of an 8x8x3 block
pub fn forward_dct_block(block: &ChannelBlocks<SampleBlock>) -> ChannelBlocks<SampleBlock> {
    let mut out = [[0.0; BLOCK_AREA]; NUM_CHANNELS];
    for (src, dst) in block.iter().zip(out.iter_mut()) {
        dct8x8_forward(src, dst);
    }
    out
}

/// Inverse DCT of each channel of an 8x8x3 coefficient block
pub fn inverse_dct_block(block: &ChannelBlocks<SampleBlock>) -> ChannelBlocks<SampleBlock> {
    let mut out = [[0.0; BLOCK_AREA]; NUM_CHANNELS];
    for (src, dst) in block.iter().zip(out.iter_mut()) {
        dct8x8_inverse(src, dst);
    }
    out
}
