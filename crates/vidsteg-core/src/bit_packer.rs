//! Bit level packing shared by the audio and the frame codec.
//!
//! [`BitPacker`] splits a payload into chunks of 1 to 8 bits,
//! [`BitUnpacker`] glues such chunks back into bytes. Both are generic over the bit order:
//! `LittleEndian` walks every byte from its least significant bit upwards (audio samples),
//! `BigEndian` from the most significant bit downwards (frame characters).

use std::io;

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, Endianness};

/// Iterates over a byte slice in chunks of `chunk_bits` bits.
///
/// The last chunk is shorter when the bit count of the input is not a multiple of
/// `chunk_bits`, its missing high bits are zero.
pub struct BitPacker<'a, E: Endianness> {
    reader: BitReader<&'a [u8], E>,
    bits_left: u64,
    chunk_bits: u32,
}

impl<'a, E: Endianness> BitPacker<'a, E> {
    pub fn new(input: &'a [u8], chunk_bits: u32, endian: E) -> Self {
        debug_assert!((1..=8).contains(&chunk_bits));
        Self {
            reader: BitReader::endian(input, endian),
            bits_left: input.len() as u64 * 8,
            chunk_bits,
        }
    }
}

impl<E: Endianness> Iterator for BitPacker<'_, E> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits_left == 0 {
            return None;
        }
        let bits = self.bits_left.min(self.chunk_bits as u64) as u32;
        let chunk = self.reader.read::<u8>(bits).ok()?;
        self.bits_left -= bits as u64;

        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let chunks = self.bits_left.div_ceil(self.chunk_bits as u64) as usize;
        (chunks, Some(chunks))
    }
}

/// Collects chunks of `chunk_bits` bits until `byte_count` bytes are complete.
pub struct BitUnpacker<E: Endianness> {
    writer: BitWriter<Vec<u8>, E>,
    bits_missing: u64,
    chunk_bits: u32,
}

impl<E: Endianness> BitUnpacker<E> {
    pub fn new(byte_count: usize, chunk_bits: u32, endian: E) -> Self {
        debug_assert!((1..=8).contains(&chunk_bits));
        Self {
            writer: BitWriter::endian(Vec::with_capacity(byte_count), endian),
            bits_missing: byte_count as u64 * 8,
            chunk_bits,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.bits_missing == 0
    }

    /// appends the low `chunk_bits` bits of `chunk`, bits beyond the requested byte count are dropped
    pub fn push(&mut self, chunk: u8) -> io::Result<()> {
        if self.is_complete() {
            return Ok(());
        }
        let bits = self.bits_missing.min(self.chunk_bits as u64) as u32;
        let value = if bits == 8 {
            chunk
        } else {
            chunk & ((1 << bits) - 1)
        };
        self.writer.write(bits, value)?;
        self.bits_missing -= bits as u64;

        Ok(())
    }

    /// all complete bytes gathered so far
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_writer()
    }
}
