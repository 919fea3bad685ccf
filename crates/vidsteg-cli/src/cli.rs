use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    HideAudio(hide_audio::HideAudioArgs),
    UnveilAudio(unveil_audio::UnveilAudioArgs),
    HideFrames(hide_frames::HideFramesArgs),
    UnveilFrames(unveil_frames::UnveilFramesArgs),
    Detect(detect::DetectArgs),
}
