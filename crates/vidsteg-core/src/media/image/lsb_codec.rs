use std::slice;

use bitstream_io::BigEndian;
use log::debug;

use super::iterators::{CharacterSlots, PIXELS_PER_CHARACTER};
use super::PixelGrid;
use crate::bit_packer::{BitPacker, BitUnpacker};
use crate::error::StegError;
use crate::media::{HideBits, MediaPrimitive, MediaPrimitiveMut, UnveilBits};
use crate::result::Result;

/// frames with less pixels are refused by both directions
pub const MIN_FRAME_PIXELS: usize = 9;

/// Character codec for a single frame.
///
/// Every byte occupies the R, G, B values of 3 consecutive pixels. The first 8 values hold the
/// bits of the byte as parities, most significant bit first. The 9th value is the terminator
/// flag: odd when another character follows, even on the last character of the frame.
/// There is no length field, reading stops at the first even terminator.
pub struct LsbCodec;

impl LsbCodec {
    /// number of bytes a frame can carry
    pub fn capacity(frame: &PixelGrid) -> usize {
        frame.pixel_count() / PIXELS_PER_CHARACTER
    }

    /// writes `chunk` into `frame`, starting at the first pixel
    pub fn hide(frame: &mut PixelGrid, index: u32, chunk: &[u8]) -> Result<()> {
        ensure_frame_size(frame, index)?;
        let capacity = Self::capacity(frame);
        if chunk.len() > capacity {
            return Err(StegError::FrameCapacityExceeded {
                index,
                chunk_size: chunk.len(),
                capacity,
            });
        }

        let slots = CharacterSlots::new(frame.pixel_count(), frame.stride());
        let raw = frame.as_raw_mut();
        for (i, (byte, offsets)) in chunk.iter().zip(slots).enumerate() {
            let bits = BitPacker::new(slice::from_ref(byte), 1, BigEndian);
            for (bit, &offset) in bits.zip(&offsets[..8]) {
                MediaPrimitiveMut::ImageColorChannel(&mut raw[offset]).hide_bits(bit, 1);
            }
            let more_follow = i + 1 < chunk.len();
            MediaPrimitiveMut::ImageColorChannel(&mut raw[offsets[8]])
                .hide_bits(u8::from(more_follow), 1);
        }
        debug!("hid {} B in frame {index}", chunk.len());

        Ok(())
    }

    /// reads characters until a terminator flag says the frame is done
    pub fn unveil(frame: &PixelGrid, index: u32) -> Result<Vec<u8>> {
        ensure_frame_size(frame, index)?;
        let slots = CharacterSlots::new(frame.pixel_count(), frame.stride());
        let raw = frame.as_raw();

        let mut unpacker = BitUnpacker::new(Self::capacity(frame), 1, BigEndian);
        let mut terminated = false;
        for offsets in slots {
            for &offset in &offsets[..8] {
                unpacker.push(MediaPrimitive::ImageColorChannel(raw[offset]).unveil_bits(1))?;
            }
            if MediaPrimitive::ImageColorChannel(raw[offsets[8]]).unveil_bits(1) == 0 {
                terminated = true;
                break;
            }
        }
        let chars = unpacker.into_bytes();
        if terminated {
            debug!("unveiled {} B from frame {index}", chars.len());
        } else {
            debug!(
                "frame {index} ran out of pixels after {} B without a terminator",
                chars.len()
            );
        }

        Ok(chars)
    }
}

fn ensure_frame_size(frame: &PixelGrid, index: u32) -> Result<()> {
    let pixels = frame.pixel_count();
    if pixels < MIN_FRAME_PIXELS {
        return Err(StegError::FrameTooSmall { index, pixels });
    }

    Ok(())
}
