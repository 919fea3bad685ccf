use crate::error::StegError;
use crate::result::Result;

/// Width of a single PCM sample
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SampleWidth {
    Eight,
    Sixteen,
}

impl SampleWidth {
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            _ => Err(StegError::UnsupportedFormat(bits)),
        }
    }

    pub fn bits(self) -> u16 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// The most negative value, its magnitude does not fit back into the width.
    /// Samples with this value are never touched.
    pub fn sentinel(self) -> i16 {
        match self {
            Self::Eight => i8::MIN as i16,
            Self::Sixteen => i16::MIN,
        }
    }

    pub fn max(self) -> i16 {
        match self {
            Self::Eight => i8::MAX as i16,
            Self::Sixteen => i16::MAX,
        }
    }

    /// bits available for the magnitude of a signed sample
    pub fn magnitude_bits(self) -> u8 {
        (self.bits() - 1) as u8
    }
}

/// Interleaved signed PCM samples of all channels
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    channels: u16,
    width: SampleWidth,
}

impl SampleBuffer {
    pub fn new(samples: Vec<i16>, channels: u16, bits_per_sample: u16) -> Result<Self> {
        let width = SampleWidth::from_bits(bits_per_sample)?;
        if channels == 0 {
            return Err(StegError::InvalidParameter(
                "an audio buffer needs at least one channel".to_string(),
            ));
        }
        if let Some(s) = samples
            .iter()
            .find(|&&s| s < width.sentinel() || s > width.max())
        {
            return Err(StegError::InvalidParameter(format!(
                "sample {s} does not fit into {bits_per_sample} bits"
            )));
        }

        Ok(Self {
            samples,
            channels,
            width,
        })
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn width(&self) -> SampleWidth {
        self.width
    }

    /// samples per channel
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_sentinel(&self, sample: i16) -> bool {
        sample == self.width.sentinel()
    }

    /// number of samples that can carry data
    pub fn usable_samples(&self) -> usize {
        self.samples.iter().filter(|&&s| !self.is_sentinel(s)).count()
    }

    /// same layout, other samples; the caller keeps them within the width
    pub(crate) fn with_samples(&self, samples: Vec<i16>) -> Self {
        Self {
            samples,
            channels: self.channels,
            width: self.width,
        }
    }
}
