use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::detector::{DetectionReport, LsbDetector};
use crate::error::StegError;
use crate::media::audio::{read_wav, write_wav, LsbCodec, UsageReport};
use crate::media::image::{decode_range, embed_range, FrameDirectory};
use crate::media::{AudioCodecOptions, FrameRange};
use crate::result::Result;

fn read_payload(data_file: &Path) -> Result<Vec<u8>> {
    fs::read(data_file).map_err(|source| StegError::ReadError { source })
}

fn write_payload(destination_file: &Path, payload: &[u8]) -> Result<()> {
    let mut destination_file =
        File::create(destination_file).map_err(|source| StegError::WriteError { source })?;

    destination_file
        .write_all(payload)
        .map_err(|source| StegError::WriteError { source })
}

/// hides the content of `data_file` in the samples of a WAV file
pub fn hide_audio(
    carrier: &Path,
    write_to_file: &Path,
    data_file: &Path,
    options: AudioCodecOptions,
) -> Result<UsageReport> {
    let codec = LsbCodec::with_options(&options)?;
    let audio = read_wav(carrier)?;
    let payload = read_payload(data_file)?;

    let (samples, report) = codec.embed(audio.samples(), &payload)?;
    write_wav(write_to_file, &audio.with_samples(samples))?;

    Ok(report)
}

/// recovers `byte_count` bytes from a WAV file and stores them as `destination_file`
pub fn unveil_audio(
    secret_media: &Path,
    destination_file: &Path,
    byte_count: usize,
    options: AudioCodecOptions,
) -> Result<()> {
    let codec = LsbCodec::with_options(&options)?;
    let audio = read_wav(secret_media)?;
    let payload = codec.extract(audio.samples(), byte_count)?;

    write_payload(destination_file, &payload)
}

/// Spreads the content of `data_file` over the frames of `range` found in `source_dir`.
///
/// Modified frames are written to `target_dir`. Frames of the range that get no data are
/// copied over, so `target_dir` can be unveiled with the same range.
pub fn hide_frames(
    source_dir: &Path,
    target_dir: &Path,
    data_file: &Path,
    range: FrameRange,
    extension: &str,
) -> Result<Vec<u32>> {
    let payload = read_payload(data_file)?;
    fs::create_dir_all(target_dir).map_err(|source| StegError::WriteError { source })?;

    let mut source = FrameDirectory::new(source_dir).with_extension(extension);
    let mut target = FrameDirectory::new(target_dir).with_extension(extension);
    let written = embed_range(range, &mut source, &mut target, &payload)?;

    if !is_same_dir(source_dir, target_dir)? {
        for index in range.indices().skip(written.len()) {
            let from = source.frame_path(index);
            if from.is_file() {
                debug!("copying untouched frame {from:?}");
                fs::copy(&from, target.frame_path(index))
                    .map_err(|source| StegError::WriteError { source })?;
            }
        }
    }
    info!(
        "hid {} B in frames {}..={} of {target_dir:?}",
        payload.len(),
        range.start(),
        range.end()
    );

    Ok(written)
}

/// reads the characters hidden in the frames of `range` and stores them as `destination_file`
pub fn unveil_frames(
    secret_dir: &Path,
    destination_file: &Path,
    range: FrameRange,
    extension: &str,
) -> Result<usize> {
    let mut frames = FrameDirectory::new(secret_dir).with_extension(extension);
    let payload = decode_range(range, &mut frames)?;
    write_payload(destination_file, &payload)?;

    Ok(payload.len())
}

/// scans the frames `0..frame_count` of `frame_dir`
pub fn detect_frames(frame_dir: &Path, frame_count: u32, extension: &str) -> DetectionReport {
    let mut frames = FrameDirectory::new(frame_dir).with_extension(extension);

    LsbDetector::new().scan(&mut frames, frame_count)
}

fn is_same_dir(a: &Path, b: &Path) -> Result<bool> {
    let a = a.canonicalize().map_err(|source| StegError::ReadError { source })?;
    let b = b.canonicalize().map_err(|source| StegError::ReadError { source })?;

    Ok(a == b)
}
