use std::ops::{Range, RangeInclusive};

use crate::error::StegError;
use crate::result::Result;

/// Default number of least significant bits used per audio sample
pub const DEFAULT_BITS_PER_SAMPLE: u8 = 2;

/// Number of pixels averaged into one block by the detector
pub const DETECTOR_BLOCK_SIZE: usize = 100;

/// Number of leading blue channel blocks the detector looks at
pub const DETECTOR_BLOCKS_CHECKED: usize = 3;

/// Mean LSB values in this band flag a frame
pub const DETECTOR_BAND: Range<f64> = 0.50..0.52;

/// Options for LSB audio encoding
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AudioCodecOptions {
    /// How many of the least significant bits of every sample carry payload, 1 to 8.
    ///
    /// Note this number influences the capacity directly.
    pub bits_per_sample: u8,
}

impl Default for AudioCodecOptions {
    fn default() -> Self {
        Self {
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }
}

impl AudioCodecOptions {
    pub fn with_bits_per_sample(mut self, bits_per_sample: u8) -> Self {
        self.bits_per_sample = bits_per_sample;
        self
    }
}

/// Inclusive range of frame numbers a payload is spread over
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FrameRange {
    start: u32,
    end: u32,
}

impl FrameRange {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if end < start {
            return Err(StegError::InvalidParameter(format!(
                "frame range ends at {end} before it starts at {start}"
            )));
        }

        Ok(Self { start, end })
    }

    /// a range covering exactly one frame
    pub fn single(index: u32) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// number of frames, never 0
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn indices(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// Options for the LSB statistical detector.
///
/// The defaults are empirical and should be kept as they are to get comparable results.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorOptions {
    /// Pixels per block, the mean LSB value is computed per block
    pub block_size: usize,

    /// How many blocks from the start of the blue channel are tested against `band`
    pub blocks_checked: usize,

    /// Half open interval of mean LSB values that flag a frame
    pub band: Range<f64>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            block_size: DETECTOR_BLOCK_SIZE,
            blocks_checked: DETECTOR_BLOCKS_CHECKED,
            band: DETECTOR_BAND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_a_range_ending_before_its_start() {
        assert!(matches!(
            FrameRange::new(5, 4),
            Err(StegError::InvalidParameter(_))
        ));
    }

    #[test]
    fn should_count_frames_inclusive() {
        let range = FrameRange::new(3, 7).unwrap();

        assert_eq!(range.len(), 5);
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
        assert_eq!(FrameRange::single(9).len(), 1);
    }

    #[test]
    fn should_count_the_full_u32_range() {
        let range = FrameRange::new(0, u32::MAX).unwrap();

        assert_eq!(range.len(), u32::MAX as usize + 1);
    }

    #[test]
    fn default_detector_options_should_be_the_empirical_ones() {
        let opts = DetectorOptions::default();

        assert_eq!(opts.block_size, 100);
        assert_eq!(opts.blocks_checked, 3);
        assert!(opts.band.contains(&0.50));
        assert!(opts.band.contains(&0.51));
        assert!(!opts.band.contains(&0.52));
        assert!(!opts.band.contains(&0.49));
    }
}
