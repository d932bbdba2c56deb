//! Level shifting
//!
//! Centers channel samples around zero before the block transform and undoes
//! it after the inverse transform.

use blockdct_core::{ChannelTriple, Plane};
use rayon::prelude::*;

fn shift_plane(plane: &Plane, offset: f64) -> Plane {
    Plane {
        width: plane.width,
        height: plane.height,
        samples: plane.samples.par_iter().map(|&s| s + offset).collect(),
    }
}

/// Add `offset` to every sample of every channel
pub fn level_shift(channels: &ChannelTriple, offset: f64) -> ChannelTriple {
    ChannelTriple {
        planes: std::array::from_fn(|c| shift_plane(&channels.planes[c], offset)),
    }
}

/// Inverse of [`level_shift`]
pub fn level_unshift(channels: &ChannelTriple, offset: f64) -> ChannelTriple {
    level_shift(channels, -offset)
}
