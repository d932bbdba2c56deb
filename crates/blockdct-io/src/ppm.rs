//! Binary PPM (P6) rasters
//!
//! Header: `P6`, width, height and maxval as ASCII decimal tokens separated by
//! whitespace, with `#` comments allowed between tokens. A single whitespace
//! byte follows maxval, then the samples: interleaved RGB, row-major, one byte
//! per sample when maxval < 256 and two big-endian bytes otherwise.

use blockdct_core::consts::NUM_CHANNELS;
use blockdct_core::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Magic number of binary PPM files
pub const PPM_MAGIC: &str = "P6";

/// Parsed PPM header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    pub dimensions: Dimensions,
    pub max_value: u16,
}

impl PpmHeader {
    /// Parse a header, leaving `reader` positioned at the first sample byte
    pub fn parse<R: BufRead>(reader: &mut R) -> CodecResult<Self> {
        let magic = next_token(reader, "magic number")?;
        if magic != PPM_MAGIC {
            return Err(CodecError::InvalidHeader(format!(
                "expected magic {}, found {:?}",
                PPM_MAGIC, magic
            )));
        }

        let width: u32 = parse_number(&next_token(reader, "width")?, "width")?;
        let height: u32 = parse_number(&next_token(reader, "height")?, "height")?;
        let max_value: u16 = parse_number(&next_token(reader, "maxval")?, "maxval")?;

        if width == 0 || height == 0 {
            return Err(CodecError::InvalidHeader(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if max_value == 0 {
            return Err(CodecError::InvalidHeader(
                "maxval must be positive".to_string(),
            ));
        }

        Ok(Self {
            dimensions: Dimensions::new(width, height),
            max_value,
        })
    }

    pub fn pixel_type(&self) -> PixelType {
        PixelType::for_max_value(self.max_value)
    }

    /// Number of sample bytes following the header
    pub fn data_len(&self) -> CodecResult<usize> {
        self.dimensions
            .checked_pixel_count()
            .and_then(|n| n.checked_mul(NUM_CHANNELS))
            .and_then(|n| n.checked_mul(self.pixel_type().bytes_per_sample()))
            .ok_or_else(|| {
                CodecError::InvalidHeader(format!(
                    "{}x{} raster is too large",
                    self.dimensions.width, self.dimensions.height
                ))
            })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> CodecResult<()> {
        write!(
            writer,
            "{}\n{} {}\n{}\n",
            PPM_MAGIC, self.dimensions.width, self.dimensions.height, self.max_value
        )?;
        Ok(())
    }
}

/// Upper bound on the raster buffer reserved up front from header values
const MAX_PREALLOCATION: usize = 64 << 20;

fn read_byte<R: BufRead>(reader: &mut R) -> CodecResult<Option<u8>> {
    let mut byte = [0u8; 1];
    match reader.read(&mut byte)? {
        0 => Ok(None),
        _ => Ok(Some(byte[0])),
    }
}

/// Read one whitespace-delimited header token, consuming the byte after it
fn next_token<R: BufRead>(reader: &mut R, what: &str) -> CodecResult<String> {
    let eof = || CodecError::InvalidHeader(format!("unexpected end of header reading {}", what));

    // Skip whitespace and comments
    let first = loop {
        match read_byte(reader)?.ok_or_else(eof)? {
            b'#' => loop {
                if read_byte(reader)?.ok_or_else(eof)? == b'\n' {
                    break;
                }
            },
            b if b.is_ascii_whitespace() => continue,
            b => break b,
        }
    };

    let mut token = vec![first];
    while let Some(b) = read_byte(reader)? {
        if b.is_ascii_whitespace() {
            break;
        }
        token.push(b);
    }

    String::from_utf8(token)
        .map_err(|_| CodecError::InvalidHeader(format!("{} is not valid ASCII", what)))
}

fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> CodecResult<T> {
    token
        .parse()
        .map_err(|_| CodecError::InvalidHeader(format!("invalid {}: {:?}", what, token)))
}

/// Read a P6 raster
pub fn read_ppm<R: Read>(reader: R) -> CodecResult<RasterImage> {
    let mut reader = BufReader::new(reader);
    let header = PpmHeader::parse(&mut reader)?;
    debug!(
        width = header.dimensions.width,
        height = header.dimensions.height,
        max_value = header.max_value,
        "parsed PPM header"
    );

    let expected = header.data_len()?;
    // The header is untrusted; let the buffer grow with the bytes actually present
    let mut data = Vec::with_capacity(expected.min(MAX_PREALLOCATION));
    reader.take(expected as u64).read_to_end(&mut data)?;
    if data.len() < expected {
        return Err(CodecError::BufferTooSmall {
            expected,
            actual: data.len(),
        });
    }

    let buffer = match header.pixel_type() {
        PixelType::U8 => SampleBuffer::U8(data),
        PixelType::U16 => SampleBuffer::U16(
            data.chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect(),
        ),
    };

    RasterImage::from_buffer(header.dimensions, header.max_value, buffer)
}

/// Read a P6 raster from a file
pub fn read_ppm_file<P: AsRef<Path>>(path: P) -> CodecResult<RasterImage> {
    read_ppm(File::open(path)?)
}

/// Write a raster as P6
pub fn write_ppm<W: Write>(image: &RasterImage, writer: W) -> CodecResult<()> {
    let mut writer = BufWriter::new(writer);
    let header = PpmHeader {
        dimensions: image.dimensions,
        max_value: image.max_value,
    };
    header.write(&mut writer)?;

    match &image.buffer {
        SampleBuffer::U8(samples) => writer.write_all(samples)?,
        SampleBuffer::U16(samples) => {
            for s in samples {
                writer.write_all(&s.to_be_bytes())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write a raster to a P6 file
pub fn write_ppm_file<P: AsRef<Path>>(image: &RasterImage, path: P) -> CodecResult<()> {
    write_ppm(image, File::create(path)?)
}
