use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageResult, RgbImage, RgbaImage};
use log::error;

use crate::error::StegError;
use crate::media::Persist;
use crate::result::Result;

/// One frame, 8 bits per channel, pixels in row-major order.
///
/// Only R, G and B carry data, an alpha channel travels along unchanged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PixelGrid {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl PixelGrid {
    pub fn from_file(f: &Path) -> Result<Self> {
        let img = image::open(f).map_err(|e| {
            error!("Error opening frame {f:?}: {e}");
            StegError::InvalidImageMedia
        })?;

        Ok(img.into())
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Rgb(i) => i.width(),
            Self::Rgba(i) => i.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Rgb(i) => i.height(),
            Self::Rgba(i) => i.height(),
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// bytes from one pixel to the next, 3 or 4
    pub fn stride(&self) -> usize {
        match self {
            Self::Rgb(_) => 3,
            Self::Rgba(_) => 4,
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        match self {
            Self::Rgb(i) => i.as_raw().as_slice(),
            Self::Rgba(i) => i.as_raw().as_slice(),
        }
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Rgb(i) => &mut **i,
            Self::Rgba(i) => &mut **i,
        }
    }

    /// the (R, G, B) values of every pixel, row by row
    pub fn rgb_pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.as_raw().chunks_exact(self.stride()).map(|p| &p[..3])
    }

    pub fn write_to<W: Write + Seek>(&self, writer: &mut W, format: ImageFormat) -> ImageResult<()> {
        match self {
            Self::Rgb(i) => i.write_to(writer, format),
            Self::Rgba(i) => i.write_to(writer, format),
        }
    }

    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            Self::Rgb(i) => DynamicImage::ImageRgb8(i),
            Self::Rgba(i) => DynamicImage::ImageRgba8(i),
        }
    }
}

impl From<DynamicImage> for PixelGrid {
    fn from(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageRgb8(i) => Self::Rgb(i),
            DynamicImage::ImageRgba8(i) => Self::Rgba(i),
            other if other.color().has_alpha() => Self::Rgba(other.to_rgba8()),
            other => Self::Rgb(other.to_rgb8()),
        }
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(img: RgbImage) -> Self {
        Self::Rgb(img)
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(img: RgbaImage) -> Self {
        Self::Rgba(img)
    }
}

impl Persist for PixelGrid {
    fn save_as(&self, file: &Path) -> Result<()> {
        let format = file
            .extension()
            .and_then(ImageFormat::from_extension)
            .unwrap_or(ImageFormat::Png);
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.write_to(&mut writer, format).map_err(|e| {
            error!("Error saving frame {file:?}: {e}");
            StegError::ImageEncodingError
        })?;
        writer
            .flush()
            .map_err(|source| StegError::WriteError { source })
    }
}
