//! Core types and utilities for block transform coding
//!
//! This crate provides the fundamental data structures shared by the pipeline
//! crates: raster images, real-valued planes, the codec configuration and the
//! error type.

pub mod coefficients;
pub mod config;
pub mod consts;
pub mod error;
pub mod image;
pub mod plane;
pub mod types;

pub use coefficients::*;
pub use config::*;
pub use error::{CodecError, CodecResult};
pub use image::*;
pub use plane::*;
pub use types::*;
