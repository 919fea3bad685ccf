use std::path::PathBuf;

use clap::Args;

use super::FrameRangeArgs;
use crate::CliResult;

/// Unveils a file from a range of PNG video frames
#[derive(Args, Debug)]
pub struct UnveilFramesArgs {
    /// Folder with the frames that contain secret data
    #[arg(short = 'i', long = "in", value_name = "frame folder", required = true)]
    pub secret_dir: PathBuf,

    /// Unveiled data will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub frames: FrameRangeArgs,
}

impl UnveilFramesArgs {
    pub fn run(self) -> CliResult<()> {
        vidsteg_core::commands::unveil_frames(
            &self.secret_dir,
            &self.output_file,
            self.frames.range()?,
            &self.frames.ext,
        )?;

        Ok(())
    }
}
