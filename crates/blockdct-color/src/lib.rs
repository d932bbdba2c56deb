//! Color space transformations for block transform coding
//!
//! This crate implements:
//! - RGB <-> YCbCr (configurable linear luma/chroma transform)
//! - Level shifting of channel planes around zero

pub mod shift;
pub mod ycbcr;

pub use shift::*;
pub use ycbcr::*;
