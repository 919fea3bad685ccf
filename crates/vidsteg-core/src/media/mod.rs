pub mod audio;
pub mod codec_options;
pub mod image;
mod primitives;

use std::path::Path;

pub use codec_options::{AudioCodecOptions, DetectorOptions, FrameRange};
pub use primitives::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
