//! # vidsteg core
//!
//! Least significant bit steganography for the two streams a video is made of:
//! - [`media::audio::LsbCodec`] hides bytes in the PCM samples of an audio track
//! - [`media::image::embed_range`] spreads bytes over a numbered range of frames,
//!   [`media::image::decode_range`] collects them again
//! - [`detector::LsbDetector`] flags frames whose blue channel looks LSB-embedded
//!
//! The codecs work in memory. [`media::audio::read_wav`] and [`media::image::FrameDirectory`]
//! connect them with WAV files and directories of PNG frames, [`commands`] wires it all up.
//!
//! # Usage Examples
//!
//! ## Hide data inside audio samples
//!
//! ```rust
//! use vidsteg_core::media::audio::{LsbCodec, SampleBuffer};
//!
//! let carrier = SampleBuffer::new(vec![1000; 64], 2, 16).unwrap();
//! let codec = LsbCodec::new(2).unwrap();
//!
//! let (secret, report) = codec.embed(&carrier, b"Hello World!").unwrap();
//! assert_eq!(report.to_string(), "Using 12 B out of 16 B");
//! assert_eq!(codec.extract(&secret, 12).unwrap(), b"Hello World!");
//! ```
//!
//! ## Spread data over frames
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use image::RgbImage;
//! use vidsteg_core::media::image::{decode_range, embed_range, PixelGrid};
//! use vidsteg_core::media::FrameRange;
//! use vidsteg_core::Result;
//!
//! let mut frames: BTreeMap<u32, PixelGrid> =
//!     (0..4).map(|i| (i, RgbImage::new(8, 8).into())).collect();
//! let range = FrameRange::new(1, 3).unwrap();
//!
//! let mut hidden = BTreeMap::new();
//! let mut load = |i: u32| -> Result<PixelGrid> { Ok(frames[&i].clone()) };
//! let mut save = |i: u32, f: &PixelGrid| -> Result<()> {
//!     hidden.insert(i, f.clone());
//!     Ok(())
//! };
//! embed_range(range, &mut load, &mut save, b"Hello World!").unwrap();
//! frames.extend(hidden);
//!
//! let mut load = |i: u32| -> Result<PixelGrid> { Ok(frames[&i].clone()) };
//! assert_eq!(decode_range(range, &mut load).unwrap(), b"Hello World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_packer;
pub mod commands;
pub mod detector;
pub mod error;
pub mod media;
pub mod result;

pub use crate::detector::{DetectionReport, LsbDetector, LsbStatistics};
pub use crate::error::StegError;
pub use crate::media::{AudioCodecOptions, DetectorOptions, FrameRange, Persist};
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    use crate::media::image::PixelGrid;

    /// RGB frame where every channel of every pixel holds `value`
    pub fn prepare_uniform_frame(width: u32, height: u32, value: u8) -> PixelGrid {
        RgbImage::from_pixel(width, height, Rgb([value; 3])).into()
    }

    pub fn prepare_uniform_rgba_frame(width: u32, height: u32, value: u8, alpha: u8) -> PixelGrid {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, alpha])).into()
    }
}
