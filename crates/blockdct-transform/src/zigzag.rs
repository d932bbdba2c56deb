//! Zigzag scanning for DCT coefficients
//!
//! The scan walks the anti-diagonals of an 8×8 block starting at (0, 0),
//! flipping direction on every diagonal: (0,0), (0,1), (1,0), (2,0), (1,1),
//! (0,2), ... The order must match the one any downstream entropy coder uses
//! bit for bit.

use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, NUM_CHANNELS};
use blockdct_core::{ChannelBlocks, LevelBlock, ZigzagVector};

/// Standard 8×8 zigzag scan order (zigzag index → row-major position)
pub const ZIGZAG_8X8: [usize; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27, 20,
    13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51, 58, 59,
    52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse zigzag scan order (row-major position → zigzag index)
pub const INV_ZIGZAG_8X8: [usize; 64] = [
    0, 1, 5, 6, 14, 15, 27, 28, 2, 4, 7, 13, 16, 26, 29, 42, 3, 8, 12, 17, 25, 30, 41, 43, 9, 11,
    18, 24, 31, 40, 44, 53, 10, 19, 23, 32, 39, 45, 52, 54, 20, 22, 33, 38, 46, 51, 55, 60, 21,
    34, 37, 47, 50, 56, 59, 61, 35, 36, 48, 49, 57, 58, 62, 63,
];

/// Anti-diagonal scan order of an `n`×`n` matrix as (row, column) pairs
///
/// Even diagonals run bottom-left to top-right, odd diagonals top-right to
/// bottom-left.
pub fn diagonal_scan_order(n: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(n * n);
    if n == 0 {
        return order;
    }

    for s in 0..(2 * n - 1) {
        let lo = s.saturating_sub(n - 1);
        let hi = s.min(n - 1);
        if s % 2 == 0 {
            order.extend((lo..=hi).rev().map(|r| (r, s - r)));
        } else {
            order.extend((lo..=hi).map(|r| (r, s - r)));
        }
    }
    order
}

/// Zigzag position of the coefficient at (row, column)
#[inline]
pub fn zigzag_index(row: usize, col: usize) -> usize {
    INV_ZIGZAG_8X8[row * BLOCK_SIZE + col]
}

/// Apply zigzag scan to an 8×8 block
///
/// # Example
/// ```
/// use blockdct_transform::zigzag_scan_8x8;
///
/// let mut block = [0i32; 64];
/// block[8] = 7; // row 1, column 0
/// let mut zigzag = [0i32; 64];
/// zigzag_scan_8x8(&block, &mut zigzag);
/// assert_eq!(zigzag[2], 7);
/// ```
pub fn zigzag_scan_8x8<T: Copy>(block: &[T; 64], output: &mut [T; 64]) {
    for (i, &pos) in ZIGZAG_8X8.iter().enumerate() {
        output[i] = block[pos];
    }
}

/// Apply inverse zigzag scan to reconstruct a row-major 8×8 block
pub fn inv_zigzag_scan_8x8<T: Copy>(zigzag: &[T; 64], output: &mut [T; 64]) {
    for (i, &pos) in ZIGZAG_8X8.iter().enumerate() {
        output[pos] = zigzag[i];
    }
}

/// Zigzag-scan every channel of a quantized 8x8x3 block
pub fn zigzag_block(block: &ChannelBlocks<LevelBlock>) -> ChannelBlocks<ZigzagVector> {
    let mut out = [[0; BLOCK_AREA]; NUM_CHANNELS];
    for (src, dst) in block.iter().zip(out.iter_mut()) {
        zigzag_scan_8x8(src, dst);
    }
    out
}

/// Restore row-major order for every channel of a zigzag-scanned block
pub fn unzigzag_block(vectors: &ChannelBlocks<ZigzagVector>) -> ChannelBlocks<LevelBlock> {
    let mut out = [[0; BLOCK_AREA]; NUM_CHANNELS];
    for (src, dst) in vectors.iter().zip(out.iter_mut()) {
        inv_zigzag_scan_8x8(src, dst);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_scan_identity() {
        let block: [i32; 64] = core::array::from_fn(|i| i as i32 * 3 - 90);
        let mut zigzag = [0i32; 64];
        let mut reconstructed = [0i32; 64];

        zigzag_scan_8x8(&block, &mut zigzag);
        inv_zigzag_scan_8x8(&zigzag, &mut reconstructed);

        assert_eq!(block, reconstructed);
    }

    #[test]
    fn test_table_matches_diagonal_walk() {
        let order = diagonal_scan_order(8);
        assert_eq!(order.len(), 64);
        for (i, &(r, c)) in order.iter().enumerate() {
            assert_eq!(ZIGZAG_8X8[i], r * 8 + c, "zigzag index {}", i);
        }
    }

    #[test]
    fn test_inverse_table_is_inverse_permutation() {
        for i in 0..64 {
            assert_eq!(INV_ZIGZAG_8X8[ZIGZAG_8X8[i]], i);
        }
        assert_eq!(zigzag_index(0, 1), 1);
        assert_eq!(zigzag_index(1, 0), 2);
        assert_eq!(zigzag_index(7, 7), 63);
    }

    #[test]
    fn test_small_diagonal_walk() {
        let matrix = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let scanned: Vec<i32> = diagonal_scan_order(3)
            .into_iter()
            .map(|(r, c)| matrix[r][c])
            .collect();
        assert_eq!(scanned, vec![1, 2, 4, 7, 5, 3, 6, 8, 9]);
        assert!(diagonal_scan_order(0).is_empty());
    }

    #[test]
    fn test_zigzag_order() {
        let mut block = [0i32; 64];
        block[0] = 100; // DC coefficient
        block[1] = 50; // (0, 1)
        block[8] = 25; // (1, 0)
        block[16] = 12; // (2, 0)

        let mut zigzag = [0i32; 64];
        zigzag_scan_8x8(&block, &mut zigzag);

        assert_eq!(zigzag[..4], [100, 50, 25, 12]);
        assert!(zigzag[4..].iter().all(|&z| z == 0));
    }

    #[test]
    fn test_channel_block_roundtrip() {
        let block: ChannelBlocks<LevelBlock> =
            core::array::from_fn(|c| core::array::from_fn(|i| (i * (c + 1)) as i32));
        let vectors = zigzag_block(&block);
        assert_eq!(vectors[2][2], 24);
        assert_eq!(unzigzag_block(&vectors), block);
    }
}
