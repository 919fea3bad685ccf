use std::path::PathBuf;

use clap::Args;
use vidsteg_core::media::image::DEFAULT_FRAME_EXTENSION;

use crate::CliResult;

/// Checks video frames for signs of LSB steganography
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Folder with the frames `0.png`, `1.png`, ...
    #[arg(short = 'i', long = "in", value_name = "frame folder", required = true)]
    pub frame_dir: PathBuf,

    /// Number of frames to check, starting at frame 0
    #[arg(short = 'n', long = "frames", value_name = "frame count", required = true)]
    pub frame_count: u32,

    /// File extension of the frames
    #[arg(long, value_name = "extension", default_value = DEFAULT_FRAME_EXTENSION)]
    pub ext: String,
}

impl DetectArgs {
    pub fn run(self) -> CliResult<()> {
        let report =
            vidsteg_core::commands::detect_frames(&self.frame_dir, self.frame_count, &self.ext);
        println!("{report}");

        Ok(())
    }
}
