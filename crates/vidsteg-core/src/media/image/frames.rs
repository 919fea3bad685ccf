use log::{debug, info};

use super::{LsbCodec, PixelGrid};
use crate::error::StegError;
use crate::media::FrameRange;
use crate::result::Result;

/// Hands out frames by their number.
///
/// A loader that has no frame for an index returns [`StegError::MissingFrame`].
pub trait FrameLoader {
    fn load_frame(&mut self, index: u32) -> Result<PixelGrid>;
}

/// Takes modified frames back under their number.
pub trait FrameSaver {
    fn save_frame(&mut self, index: u32, frame: &PixelGrid) -> Result<()>;
}

impl<F> FrameLoader for F
where
    F: FnMut(u32) -> Result<PixelGrid>,
{
    fn load_frame(&mut self, index: u32) -> Result<PixelGrid> {
        self(index)
    }
}

impl<F> FrameSaver for F
where
    F: FnMut(u32, &PixelGrid) -> Result<()>,
{
    fn save_frame(&mut self, index: u32, frame: &PixelGrid) -> Result<()> {
        self(index, frame)
    }
}

/// Spreads `payload` over the frames of `range`.
///
/// The payload is cut into chunks of `ceil(len / frames)` bytes, chunk `i` goes into frame
/// `start + i`. Frames that get no chunk are neither loaded nor saved.
/// Returns the indices of the frames that were written.
pub fn embed_range<L, S>(
    range: FrameRange,
    loader: &mut L,
    saver: &mut S,
    payload: &[u8],
) -> Result<Vec<u32>>
where
    L: FrameLoader + ?Sized,
    S: FrameSaver + ?Sized,
{
    if payload.is_empty() {
        return Err(StegError::InvalidParameter(
            "there is nothing to hide in an empty payload".to_string(),
        ));
    }
    let chunk_size = payload.len().div_ceil(range.len());
    debug!(
        "spreading {} B over frames {}..={} in chunks of {chunk_size} B",
        payload.len(),
        range.start(),
        range.end()
    );

    let mut written = Vec::new();
    for (index, chunk) in range.indices().zip(payload.chunks(chunk_size)) {
        let mut frame = loader.load_frame(index)?;
        LsbCodec::hide(&mut frame, index, chunk)?;
        saver.save_frame(index, &frame)?;
        written.push(index);
    }
    info!("hid {} B in {} frames", payload.len(), written.len());

    Ok(written)
}

/// Reads the characters of every frame in `range` and concatenates them in index order.
pub fn decode_range<L>(range: FrameRange, loader: &mut L) -> Result<Vec<u8>>
where
    L: FrameLoader + ?Sized,
{
    let mut payload = Vec::new();
    for index in range.indices() {
        let frame = loader.load_frame(index)?;
        payload.extend(LsbCodec::unveil(&frame, index)?);
    }
    info!(
        "unveiled {} B from frames {}..={}",
        payload.len(),
        range.start(),
        range.end()
    );

    Ok(payload)
}
