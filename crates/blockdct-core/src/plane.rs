//! Real-valued planar channel storage

use crate::consts::NUM_CHANNELS;
use crate::{CodecError, CodecResult};

/// A single real-valued channel, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f64>,
}

impl Plane {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![0.0; width * height],
        }
    }

    pub fn from_samples(width: usize, height: usize, samples: Vec<f64>) -> CodecResult<Self> {
        if samples.len() != width * height {
            return Err(CodecError::BufferTooSmall {
                expected: width * height,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.samples[y * self.width + x]
    }
}

/// Three planes of equal shape, in channel order
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTriple {
    pub planes: [Plane; NUM_CHANNELS],
}

impl ChannelTriple {
    pub fn new(planes: [Plane; NUM_CHANNELS]) -> CodecResult<Self> {
        let (width, height) = (planes[0].width, planes[0].height);
        if planes
            .iter()
            .any(|p| p.width != width || p.height != height)
        {
            return Err(CodecError::InvalidParameter(
                "all planes of a channel triple must share one shape".to_string(),
            ));
        }
        Ok(Self { planes })
    }

    pub fn width(&self) -> usize {
        self.planes[0].width
    }

    pub fn height(&self) -> usize {
        self.planes[0].height
    }

    /// Split interleaved samples into three planes
    pub fn from_interleaved(width: usize, height: usize, samples: &[f64]) -> CodecResult<Self> {
        let expected = width * height * NUM_CHANNELS;
        if samples.len() != expected {
            return Err(CodecError::BufferTooSmall {
                expected,
                actual: samples.len(),
            });
        }

        let planes = std::array::from_fn(|c| Plane {
            width,
            height,
            samples: samples
                .iter()
                .skip(c)
                .step_by(NUM_CHANNELS)
                .copied()
                .collect(),
        });
        Ok(Self { planes })
    }

    /// Interleave the three planes back into one buffer
    pub fn to_interleaved(&self) -> Vec<f64> {
        let pixel_count = self.width() * self.height();
        let mut out = Vec::with_capacity(pixel_count * NUM_CHANNELS);
        for i in 0..pixel_count {
            for plane in &self.planes {
                out.push(plane.samples[i]);
            }
        }
        out
    }
}
