use std::path::PathBuf;

use clap::Args;

use super::FrameRangeArgs;
use crate::CliResult;

/// Spreads a file over a range of PNG video frames
#[derive(Args, Debug)]
pub struct HideFramesArgs {
    /// Folder with the frames, used readonly unless it is also the output folder
    #[arg(short = 'i', long = "in", value_name = "frame folder", required = true)]
    pub source_dir: PathBuf,

    /// Modified frames will be stored in that folder
    #[arg(short = 'o', long = "out", value_name = "output folder", required = true)]
    pub target_dir: PathBuf,

    /// File to hide in the frames
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    #[command(flatten)]
    pub frames: FrameRangeArgs,
}

impl HideFramesArgs {
    pub fn run(self) -> CliResult<()> {
        let written = vidsteg_core::commands::hide_frames(
            &self.source_dir,
            &self.target_dir,
            &self.data_file,
            self.frames.range()?,
            &self.frames.ext,
        )?;
        println!("Data hidden in Frames: {written:?}");

        Ok(())
    }
}
