//! Linear RGB <-> luma/chroma conversion
//!
//! The forward transform is `out = W · rgb + offset` per pixel. The inverse
//! subtracts the offsets and applies `W⁻¹`, computed once from the configured
//! weights, so the pair round-trips up to floating-point rounding for any
//! invertible weight matrix.

use blockdct_core::consts::NUM_CHANNELS;
use blockdct_core::*;
use num_traits::Float;
use rayon::prelude::*;

/// Invert a 3x3 matrix, returning `None` when it is singular
pub fn invert_3x3<T: Float>(m: &[[T; 3]; 3]) -> Option<[[T; 3]; 3]> {
    let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| {
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    };

    let c00 = cofactor(1, 2, 1, 2);
    let c01 = -cofactor(1, 2, 0, 2);
    let c02 = cofactor(1, 2, 0, 1);

    let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;
    if !det.is_finite() || det.abs() <= T::epsilon() {
        return None;
    }

    // Adjugate is the transposed cofactor matrix
    let adj = [
        [c00, -cofactor(0, 2, 1, 2), cofactor(0, 1, 1, 2)],
        [c01, cofactor(0, 2, 0, 2), -cofactor(0, 1, 0, 2)],
        [c02, -cofactor(0, 2, 0, 1), cofactor(0, 1, 0, 1)],
    ];

    let mut inv = [[T::zero(); 3]; 3];
    for (r, row) in adj.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            inv[r][c] = value / det;
        }
    }
    Some(inv)
}

#[inline]
fn mat_vec(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    std::array::from_fn(|r| m[r][0] * v[0] + m[r][1] * v[1] + m[r][2] * v[2])
}

/// RGB <-> YCbCr converter built from a [`ColorTransform`]
#[derive(Debug, Clone)]
pub struct ColorConverter {
    transform: ColorTransform,
    inverse: [[f64; 3]; 3],
}

impl ColorConverter {
    pub fn new(transform: ColorTransform) -> CodecResult<Self> {
        let inverse = invert_3x3(&transform.weights).ok_or_else(|| {
            CodecError::InvalidParameter(format!(
                "color weight matrix {:?} is not invertible",
                transform.weights
            ))
        })?;

        Ok(Self { transform, inverse })
    }

    pub fn transform(&self) -> &ColorTransform {
        &self.transform
    }

    /// Convert one RGB triple to luma/chroma
    #[inline]
    pub fn rgb_to_ycbcr(&self, rgb: [f64; 3]) -> [f64; 3] {
        let weighted = mat_vec(&self.transform.weights, rgb);
        std::array::from_fn(|c| weighted[c] + self.transform.offsets[c])
    }

    /// Convert one luma/chroma triple back to RGB
    #[inline]
    pub fn ycbcr_to_rgb(&self, ycbcr: [f64; 3]) -> [f64; 3] {
        let centered = std::array::from_fn(|c| ycbcr[c] - self.transform.offsets[c]);
        mat_vec(&self.inverse, centered)
    }

    /// Batch convert interleaved RGB to interleaved luma/chroma
    pub fn rgb_buffer_to_ycbcr(&self, rgb: &[f64]) -> Vec<f64> {
        debug_assert_eq!(rgb.len() % NUM_CHANNELS, 0);
        rgb.par_chunks_exact(NUM_CHANNELS)
            .flat_map_iter(|px| self.rgb_to_ycbcr([px[0], px[1], px[2]]))
            .collect()
    }

    /// Batch convert interleaved luma/chroma to interleaved RGB
    pub fn ycbcr_buffer_to_rgb(&self, ycbcr: &[f64]) -> Vec<f64> {
        debug_assert_eq!(ycbcr.len() % NUM_CHANNELS, 0);
        ycbcr
            .par_chunks_exact(NUM_CHANNELS)
            .flat_map_iter(|px| self.ycbcr_to_rgb([px[0], px[1], px[2]]))
            .collect()
    }

    /// Convert a raster into luma/chroma planes
    pub fn forward_image(&self, image: &RasterImage) -> CodecResult<ChannelTriple> {
        let ycbcr = self.rgb_buffer_to_ycbcr(&image.buffer.to_f64_vec());
        ChannelTriple::from_interleaved(image.width() as usize, image.height() as usize, &ycbcr)
    }

    /// Convert luma/chroma planes into interleaved, real-valued RGB
    pub fn inverse_planes(&self, planes: &ChannelTriple) -> Vec<f64> {
        self.ycbcr_buffer_to_rgb(&planes.to_interleaved())
    }
}

impl Default for ColorConverter {
    fn default() -> Self {
        // The canonical weights have determinant ≈ 0.236, far from singular
        Self::new(ColorTransform::default()).expect("canonical color weights are invertible")
    }
}
