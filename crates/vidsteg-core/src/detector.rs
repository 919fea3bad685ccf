//! LSB statistical detector.
//!
//! Natural images show a blue channel whose least significant bits are far from random in
//! the first few rows. LSB embedding pushes the mean LSB value of a block towards 0.5, so a
//! frame is flagged when one of its leading blue blocks falls into a narrow band around it.

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, info, warn};

use crate::error::StegError;
use crate::media::image::{FrameLoader, PixelGrid};
use crate::media::DetectorOptions;
use crate::result::Result;

/// Mean LSB value per block of pixels, one series per color channel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LsbStatistics {
    pub red: Vec<f64>,
    pub green: Vec<f64>,
    pub blue: Vec<f64>,
}

/// Outcome of scanning a numbered frame sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetectionReport {
    /// indices of the frames that look like they carry LSB data
    pub flagged: BTreeSet<u32>,

    /// number of frames that were loaded and tested
    pub scanned: u32,
}

impl DetectionReport {
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            write!(f, "No Steganography Detected in the Frames Provided!")
        } else {
            let flagged: Vec<_> = self.flagged.iter().collect();
            write!(f, "Steganography Detected in Frame: {flagged:?}")
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LsbDetector {
    options: DetectorOptions,
}

impl LsbDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DetectorOptions) -> Result<Self> {
        if options.block_size == 0 {
            return Err(StegError::InvalidParameter(
                "detector blocks need at least one pixel".to_string(),
            ));
        }

        Ok(Self { options })
    }

    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    /// Mean of `value & 1` per block, pixels taken row by row.
    /// The last block may hold fewer pixels than the others.
    pub fn statistics(&self, frame: &PixelGrid) -> LsbStatistics {
        let mut stats = LsbStatistics::default();
        let pixels: Vec<&[u8]> = frame.rgb_pixels().collect();
        for block in pixels.chunks(self.options.block_size) {
            let mut odd = [0usize; 3];
            for pixel in block {
                for (count, value) in odd.iter_mut().zip(pixel.iter()) {
                    *count += (value & 1) as usize;
                }
            }
            let n = block.len() as f64;
            stats.red.push(odd[0] as f64 / n);
            stats.green.push(odd[1] as f64 / n);
            stats.blue.push(odd[2] as f64 / n);
        }

        stats
    }

    /// true when one of the leading blue blocks has its mean inside the band
    pub fn is_suspicious(&self, frame: &PixelGrid) -> bool {
        self.statistics(frame)
            .blue
            .iter()
            .take(self.options.blocks_checked)
            .any(|mean| self.options.band.contains(mean))
    }

    /// Tests the frames `0..frame_count` one after the other.
    ///
    /// The first frame that cannot be loaded ends the scan, the report covers what was
    /// scanned up to there.
    pub fn scan<L>(&self, loader: &mut L, frame_count: u32) -> DetectionReport
    where
        L: FrameLoader + ?Sized,
    {
        let mut report = DetectionReport::default();
        for index in 0..frame_count {
            let frame = match loader.load_frame(index) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("stopping the scan at frame {index}: {e}");
                    break;
                }
            };
            if self.is_suspicious(&frame) {
                debug!("frame {index} looks suspicious");
                report.flagged.insert(index);
            }
            report.scanned += 1;
        }
        info!(
            "scanned {} frames, {} flagged",
            report.scanned,
            report.flagged.len()
        );

        report
    }
}
