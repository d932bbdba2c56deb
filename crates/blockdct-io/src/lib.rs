//! Reading and writing rasters and coefficient data
//!
//! - `ppm`: binary PPM (P6) rasters, 8- or 16-bit samples
//! - `text`: the ASCII coefficient format produced by the encoder

pub mod ppm;
pub mod text;

pub use ppm::{read_ppm, read_ppm_file, write_ppm, write_ppm_file, PpmHeader, PPM_MAGIC};
pub use text::{read_coefficients, read_coefficients_file, write_coefficients, write_coefficients_file};
