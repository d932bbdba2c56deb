//! Closed-form 8x8 DCT
//!
//! Direct O(N^4) evaluation of the DCT-II / DCT-III sums. Kept as the
//! reference the separable implementation is checked against.

use blockdct_core::consts::BLOCK_SIZE;
use blockdct_core::SampleBlock;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

#[inline]
fn scale(k: usize) -> f64 {
    if k == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

#[inline]
fn basis(n: usize, k: usize) -> f64 {
    (((2 * n + 1) * k) as f64 * PI / 16.0).cos()
}

/// 8x8 DCT-II (forward transform), direct summation
pub fn dct8x8_forward_reference(input: &SampleBlock, output: &mut SampleBlock) {
    const N: usize = BLOCK_SIZE;

    for u in 0..N {
        for v in 0..N {
            let mut sum = 0.0;
            for i in 0..N {
                for j in 0..N {
                    sum += input[i * N + j] * basis(i, u) * basis(j, v);
                }
            }
            output[u * N + v] = scale(u) * scale(v) * sum / 4.0;
        }
    }
}

/// 8x8 DCT-III (inverse transform), direct summation
pub fn dct8x8_inverse_reference(input: &SampleBlock, output: &mut SampleBlock) {
    const N: usize = BLOCK_SIZE;

    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for u in 0..N {
                for v in 0..N {
                    sum += scale(u) * scale(v) * input[u * N + v] * basis(i, u) * basis(j, v);
                }
            }
            output[i * N + j] = sum / 4.0;
        }
    }
}
