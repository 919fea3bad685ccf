use std::path::PathBuf;

use clap::Args;
use vidsteg_core::media::codec_options::DEFAULT_BITS_PER_SAMPLE;
use vidsteg_core::AudioCodecOptions;

use crate::CliResult;

/// Hides a file in the samples of a WAV audio track
#[derive(Args, Debug)]
pub struct HideAudioArgs {
    /// WAV audio file used as carrier, used readonly
    #[arg(short = 'i', long = "in", value_name = "wav file", required = true)]
    pub carrier: PathBuf,

    /// Final audio will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output wav file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the audio
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    /// Least significant bits per sample carrying data, 1 to 8
    #[arg(
        short = 'b',
        long = "bits",
        value_name = "bits",
        default_value_t = DEFAULT_BITS_PER_SAMPLE
    )]
    pub bits_per_sample: u8,
}

impl HideAudioArgs {
    pub fn run(self) -> CliResult<()> {
        let report = vidsteg_core::commands::hide_audio(
            &self.carrier,
            &self.write_to_file,
            &self.data_file,
            AudioCodecOptions::default().with_bits_per_sample(self.bits_per_sample),
        )?;
        println!("{report}");

        Ok(())
    }
}
