pub mod detect;
pub mod hide_audio;
pub mod hide_frames;
pub mod unveil_audio;
pub mod unveil_frames;

use clap::Args;
use vidsteg_core::media::image::DEFAULT_FRAME_EXTENSION;
use vidsteg_core::FrameRange;

use crate::CliResult;

/// Frames carrying the data, named `{index}.{ext}`
#[derive(Args, Debug)]
pub struct FrameRangeArgs {
    /// First frame of the range
    #[arg(long, value_name = "index")]
    pub start: u32,

    /// Last frame of the range, inclusive
    #[arg(long, value_name = "index")]
    pub end: u32,

    /// File extension of the frames
    #[arg(long, value_name = "extension", default_value = DEFAULT_FRAME_EXTENSION)]
    pub ext: String,
}

impl FrameRangeArgs {
    pub fn range(&self) -> CliResult<FrameRange> {
        FrameRange::new(self.start, self.end)
    }
}
