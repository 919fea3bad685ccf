use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use hound::WavSpec;
use hound::{SampleFormat, WavReader, WavWriter};
use log::error;

use super::{SampleBuffer, SampleWidth};
use crate::error::StegError;
use crate::media::Persist;
use crate::result::Result;

/// PCM samples together with the WAV parameters they came with
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    spec: WavSpec,
    samples: SampleBuffer,
}

impl WavAudio {
    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// same WAV parameters, other samples
    pub fn with_samples(&self, samples: SampleBuffer) -> Self {
        Self {
            spec: self.spec,
            samples,
        }
    }

    pub fn save_to_writer<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut wav_writer = WavWriter::new(writer, self.spec).map_err(|e| {
            error!("Error creating wav writer: {e}");
            StegError::AudioEncodingError
        })?;
        for &s in self.samples.samples() {
            wav_writer.write_sample(s).map_err(|e| {
                error!("Error writing sample: {e}");
                StegError::AudioEncodingError
            })?;
        }

        wav_writer.finalize().map_err(|e| {
            error!("Error finalizing wav: {e}");
            StegError::AudioEncodingError
        })
    }
}

impl Persist for WavAudio {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f))
    }
}

/// Reads an integer PCM WAV file of 8 or 16 bits per sample.
pub fn read_wav(file: &Path) -> Result<WavAudio> {
    let mut reader = WavReader::open(file).map_err(|e| {
        error!("Error opening wav {file:?}: {e}");
        StegError::InvalidAudioMedia
    })?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int {
        error!("{file:?} holds float samples, only integer PCM is supported");
        return Err(StegError::InvalidAudioMedia);
    }
    // 24 and 32 bit samples would not fit into i16
    SampleWidth::from_bits(spec.bits_per_sample)?;

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Error reading samples of {file:?}: {e}");
            StegError::InvalidAudioMedia
        })?;

    Ok(WavAudio {
        spec,
        samples: SampleBuffer::new(samples, spec.channels, spec.bits_per_sample)?,
    })
}

/// Writes `audio` to `file`, keeping its WAV parameters.
pub fn write_wav(file: &Path, audio: &WavAudio) -> Result<()> {
    audio.save_as(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_fixture(file: &Path, bits_per_sample: u16, samples: &[i16]) {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(file, spec).unwrap();
        for &s in samples {
            writer.write_sample(s as i32).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn should_read_and_write_16_bit_wav() {
        let out_dir = TempDir::new().unwrap();
        let input = out_dir.path().join("in.wav");
        let output = out_dir.path().join("out.wav");
        write_fixture(&input, 16, &[i16::MIN, -1, 0, 1, 1000, i16::MAX]);

        let audio = read_wav(&input).unwrap();
        assert_eq!(audio.samples().channels(), 2);
        assert_eq!(audio.samples().frame_count(), 3);
        assert_eq!(audio.samples().width(), SampleWidth::Sixteen);

        write_wav(&output, &audio).unwrap();
        assert_eq!(read_wav(&output).unwrap(), audio);
    }

    #[test]
    fn should_read_8_bit_wav_as_signed_samples() {
        let out_dir = TempDir::new().unwrap();
        let input = out_dir.path().join("in.wav");
        write_fixture(&input, 8, &[-128, -1, 0, 127]);

        let audio = read_wav(&input).unwrap();

        assert_eq!(audio.samples().width(), SampleWidth::Eight);
        assert_eq!(audio.samples().samples(), &[-128, -1, 0, 127]);
    }

    #[test]
    fn should_refuse_24_bit_wav() {
        let out_dir = TempDir::new().unwrap();
        let input = out_dir.path().join("in.wav");
        write_fixture(&input, 24, &[0, 1]);

        assert!(matches!(
            read_wav(&input),
            Err(StegError::UnsupportedFormat(24))
        ));
    }

    #[test]
    fn should_refuse_files_that_are_not_wav() {
        assert!(matches!(
            read_wav("Cargo.toml".as_ref()),
            Err(StegError::InvalidAudioMedia)
        ));
    }
}
