use std::path::PathBuf;

use clap::Args;
use vidsteg_core::media::codec_options::DEFAULT_BITS_PER_SAMPLE;
use vidsteg_core::AudioCodecOptions;

use crate::CliResult;

/// Unveils a file from the samples of a WAV audio track
#[derive(Args, Debug)]
pub struct UnveilAudioArgs {
    /// WAV audio file that contains secret data
    #[arg(short = 'i', long = "in", value_name = "wav file", required = true)]
    pub secret_media: PathBuf,

    /// Unveiled data will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    /// Number of bytes that were hidden
    #[arg(short = 'n', long = "bytes", value_name = "byte count", required = true)]
    pub byte_count: usize,

    /// Least significant bits per sample carrying data, as used when hiding
    #[arg(
        short = 'b',
        long = "bits",
        value_name = "bits",
        default_value_t = DEFAULT_BITS_PER_SAMPLE
    )]
    pub bits_per_sample: u8,
}

impl UnveilAudioArgs {
    pub fn run(self) -> CliResult<()> {
        vidsteg_core::commands::unveil_audio(
            &self.secret_media,
            &self.output_file,
            self.byte_count,
            AudioCodecOptions::default().with_bits_per_sample(self.bits_per_sample),
        )
    }
}
