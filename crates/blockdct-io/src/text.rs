//! ASCII coefficient format
//!
//! ```text
//! <width> x <height>
//! <64 ints>        block 0, channel Y
//! ...
//! <64 ints>        block N-1, channel Y
//!                  (empty line)
//! <64 ints>        block 0, channel Cb
//! ...
//! ```
//!
//! Each channel section is preceded and followed by a newline, so sections
//! are separated by one blank line and the file ends with a newline. Integers
//! are separated by single spaces.

use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, NUM_CHANNELS};
use blockdct_core::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Upper bound on vectors reserved up front from the header
const MAX_PREALLOCATED_VECTORS: usize = 1 << 16;

fn write_vector<W: Write>(writer: &mut W, vector: &ZigzagVector) -> CodecResult<()> {
    for (i, value) in vector.iter().enumerate() {
        if i > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{}", value)?;
    }
    Ok(())
}

/// Serialize coefficient vectors as text
pub fn write_coefficients<W: Write>(image: &CoefficientImage, writer: W) -> CodecResult<()> {
    let mut writer = BufWriter::new(writer);
    write!(
        writer,
        "{} x {}",
        image.dimensions.width, image.dimensions.height
    )?;

    for channel in &image.channels {
        writer.write_all(b"\n")?;
        for (i, vector) in channel.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            write_vector(&mut writer, vector)?;
        }
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Serialize coefficient vectors to a text file
pub fn write_coefficients_file<P: AsRef<Path>>(
    image: &CoefficientImage,
    path: P,
) -> CodecResult<()> {
    write_coefficients(image, File::create(path)?)
}

fn parse_dimensions(line: &str) -> CodecResult<Dimensions> {
    let invalid = || {
        CodecError::InvalidCoefficients(format!(
            "expected '<width> x <height>', found {:?}",
            line
        ))
    };

    let mut parts = line.split_whitespace();
    let (Some(w), Some("x"), Some(h), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let width = w.parse().map_err(|_| invalid())?;
    let height = h.parse().map_err(|_| invalid())?;
    Ok(Dimensions::new(width, height))
}

fn parse_vector(line: &str, line_number: usize) -> CodecResult<ZigzagVector> {
    let mut vector = [0i32; BLOCK_AREA];
    let mut count = 0;

    for token in line.split_whitespace() {
        if count == BLOCK_AREA {
            count += 1;
            break;
        }
        vector[count] = token.parse().map_err(|_| {
            CodecError::InvalidCoefficients(format!(
                "line {}: invalid coefficient {:?}",
                line_number, token
            ))
        })?;
        count += 1;
    }

    if count != BLOCK_AREA {
        return Err(CodecError::InvalidCoefficients(format!(
            "line {}: expected {} coefficients",
            line_number, BLOCK_AREA
        )));
    }
    Ok(vector)
}

/// Parse text produced by [`write_coefficients`]
///
/// Blank lines are treated as section separators. The number of vectors must
/// equal three times the block count implied by the header dimensions.
pub fn read_coefficients<R: BufRead>(reader: R) -> CodecResult<CoefficientImage> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => {
            return Err(CodecError::InvalidCoefficients(
                "empty coefficient data".to_string(),
            ))
        }
    };
    let dimensions = parse_dimensions(&header)?;
    let (blocks_x, blocks_y) = dimensions.block_grid(BLOCK_SIZE);
    let too_large = || {
        CodecError::InvalidCoefficients(format!(
            "{}x{} image is too large",
            dimensions.width, dimensions.height
        ))
    };
    let per_channel = blocks_x.checked_mul(blocks_y).ok_or_else(too_large)?;
    let total = per_channel.checked_mul(NUM_CHANNELS).ok_or_else(too_large)?;

    // Grow with the vectors actually present rather than the header's claim
    let mut vectors = Vec::with_capacity(total.min(MAX_PREALLOCATED_VECTORS));
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if vectors.len() == total {
            return Err(CodecError::InvalidCoefficients(format!(
                "line {}: more than {} vectors for a {}x{} image",
                index + 1,
                total,
                dimensions.width,
                dimensions.height
            )));
        }
        vectors.push(parse_vector(&line, index + 1)?);
    }

    if vectors.len() != total {
        return Err(CodecError::InvalidCoefficients(format!(
            "found {} vectors, a {}x{} image needs {}",
            vectors.len(),
            dimensions.width,
            dimensions.height,
            total
        )));
    }

    debug!(blocks_x, blocks_y, "parsed coefficient text");

    let mut chunks = vectors.chunks_exact(per_channel.max(1));
    let channels = std::array::from_fn(|_| chunks.next().map(<[_]>::to_vec).unwrap_or_default());

    CoefficientImage::new(dimensions, channels)
}

/// Parse a coefficient text file
pub fn read_coefficients_file<P: AsRef<Path>>(path: P) -> CodecResult<CoefficientImage> {
    read_coefficients(BufReader::new(File::open(path)?))
}
