//! # blockdct
//!
//! JPEG-style transform coding of RGB rasters: luma/chroma conversion, level
//! shift, 8x8 block DCT, quantization and zigzag scan, plus the inverse path.
//! Entropy coding is out of scope; the encoded form is a list of zigzag
//! vectors per channel, serialized as text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blockdct::{read_ppm_file, write_coefficients_file, Encoder};
//!
//! let image = read_ppm_file("input.ppm").unwrap();
//! let encoder = Encoder::for_max_value(image.max_value).unwrap();
//! let coefficients = encoder.encode(&image).unwrap();
//! write_coefficients_file(&coefficients, "coefficients.txt").unwrap();
//! ```
//!
//! ```no_run
//! use blockdct::{read_coefficients_file, write_ppm_file, Decoder};
//!
//! let coefficients = read_coefficients_file("coefficients.txt").unwrap();
//! let image = Decoder::default().decode(&coefficients).unwrap();
//! write_ppm_file(&image, "decoded.ppm").unwrap();
//! ```
//!
//! Only whole 8x8 blocks are coded. Right and bottom strips narrower than a
//! block are dropped, and the decoded raster covers the block grid.

pub use blockdct_core::{
    consts, ChannelBlocks, ChannelTriple, CodecConfig, CodecError, CodecResult, CoefficientImage,
    ColorTransform, Dimensions, LevelBlock, PixelType, Plane, QuantMatrix, RasterImage,
    SampleBlock, SampleBuffer, ZigzagVector,
};

pub use blockdct_color::{level_shift, level_unshift, ColorConverter};

pub use blockdct_transform::{
    dct8x8_forward, dct8x8_inverse, dequantize, inv_zigzag_scan_8x8, merge_blocks,
    merge_channels, quantize, split_channels, split_plane, zigzag_scan_8x8, BlockGrid,
};

pub use blockdct_io::{
    read_coefficients, read_coefficients_file, read_ppm, read_ppm_file, write_coefficients,
    write_coefficients_file, write_ppm, write_ppm_file,
};

pub use blockdct_decoder::Decoder;
pub use blockdct_encoder::Encoder;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
