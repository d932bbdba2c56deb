//! Constants used throughout the block transform pipeline

/// Block edge length in samples
pub const BLOCK_SIZE: usize = 8;

/// Number of samples (and coefficients) in one block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Number of color channels carried through the pipeline
pub const NUM_CHANNELS: usize = 3;

/// Largest sample value a raster may declare
pub const MAX_SAMPLE_VALUE: u16 = u16::MAX;

/// Default maximum sample value (8-bit rasters)
pub const DEFAULT_MAX_VALUE: u16 = 255;

/// Luma weights for R, G, B
pub const DEFAULT_Y_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Blue-difference chroma weights for R, G, B
pub const DEFAULT_CB_WEIGHTS: [f64; 3] = [-0.1687, -0.3313, 0.5];

/// Red-difference chroma weights for R, G, B
pub const DEFAULT_CR_WEIGHTS: [f64; 3] = [0.5, -0.4187, -0.0813];

/// Standard luminance quantization table
pub const DEFAULT_LUMA_TABLE: [[u16; 8]; 8] = [
    [16, 11, 10, 16, 24, 40, 51, 61],
    [12, 12, 14, 19, 26, 58, 60, 55],
    [14, 13, 16, 24, 40, 57, 69, 56],
    [14, 17, 22, 29, 51, 87, 80, 62],
    [18, 22, 37, 56, 68, 109, 103, 77],
    [24, 35, 55, 64, 81, 104, 113, 92],
    [49, 64, 78, 87, 103, 121, 120, 101],
    [72, 92, 95, 98, 112, 100, 103, 99],
];

/// Standard chrominance quantization table
pub const DEFAULT_CHROMA_TABLE: [[u16; 8]; 8] = [
    [17, 18, 24, 47, 99, 99, 99, 99],
    [18, 21, 26, 66, 99, 99, 99, 99],
    [24, 26, 56, 99, 99, 99, 99, 99],
    [47, 66, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
];
