use std::path::{Path, PathBuf};

use log::debug;

use super::{FrameLoader, FrameSaver, PixelGrid};
use crate::error::StegError;
use crate::media::Persist;
use crate::result::Result;

pub const DEFAULT_FRAME_EXTENSION: &str = "png";

/// A directory of frames stored as `{index}.{extension}`, for example `0.png`, `1.png`, ...
///
/// Works as [`FrameLoader`] and as [`FrameSaver`]. The frame format follows the extension,
/// only lossless formats keep the hidden data intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDirectory {
    dir: PathBuf,
    extension: String,
}

impl FrameDirectory {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: DEFAULT_FRAME_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!("{index}.{}", self.extension))
    }
}

impl FrameLoader for FrameDirectory {
    fn load_frame(&mut self, index: u32) -> Result<PixelGrid> {
        let path = self.frame_path(index);
        if !path.is_file() {
            return Err(StegError::MissingFrame(index));
        }
        debug!("loading frame {path:?}");

        PixelGrid::from_file(&path)
    }
}

impl FrameSaver for FrameDirectory {
    fn save_frame(&mut self, index: u32, frame: &PixelGrid) -> Result<()> {
        let path = self.frame_path(index);
        debug!("saving frame {path:?}");

        frame.save_as(&path)
    }
}
