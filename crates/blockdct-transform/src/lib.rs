//! Transform operations for block transform coding
//!
//! This crate implements block partitioning, the 8x8 DCT (a closed-form
//! reference and a separable implementation), quantization and zigzag
//! coefficient scanning.

pub mod blocks;
pub mod dct;
pub mod dct_separable;
pub mod quantization;
pub mod zigzag;

pub use blocks::*;
pub use dct::*;
pub use dct_separable::*;
pub use quantization::*;
pub use zigzag::*;
