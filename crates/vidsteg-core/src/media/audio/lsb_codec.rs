use std::fmt;

use bitstream_io::LittleEndian;
use log::{debug, info};

use super::SampleBuffer;
use crate::bit_packer::{BitPacker, BitUnpacker};
use crate::error::StegError;
use crate::media::{
    AudioCodecOptions, HideBits, MediaPrimitive, MediaPrimitiveMut, UnveilBits,
};
use crate::result::Result;

/// How much of the carrier a payload occupies
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct UsageReport {
    pub used: usize,
    pub capacity: usize,
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Using {} B out of {} B", self.used, self.capacity)
    }
}

/// LSB codec for PCM samples.
///
/// The payload is a bit stream, least significant bit of each byte first, cut into chunks of
/// `bits_per_sample` bits. Every chunk replaces the low bits of the magnitude of one sample,
/// the sign is kept. Samples holding the sentinel value of their width are skipped by both
/// directions. No length is stored, the reader has to know how many bytes to extract.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LsbCodec {
    bits_per_sample: u8,
}

impl LsbCodec {
    pub fn new(bits_per_sample: u8) -> Result<Self> {
        if !(1..=8).contains(&bits_per_sample) {
            return Err(StegError::InvalidParameter(format!(
                "bits per sample must be between 1 and 8, got {bits_per_sample}"
            )));
        }

        Ok(Self { bits_per_sample })
    }

    pub fn with_options(opts: &AudioCodecOptions) -> Result<Self> {
        Self::new(opts.bits_per_sample)
    }

    pub fn bits_per_sample(&self) -> u8 {
        self.bits_per_sample
    }

    /// nominal capacity in bytes, counting every sample of every channel
    pub fn capacity(&self, carrier: &SampleBuffer) -> usize {
        carrier.len() * self.bits_per_sample as usize / 8
    }

    /// Hides `payload` in a copy of `carrier`.
    ///
    /// Fails with [`StegError::CapacityExceeded`] when the payload is larger than the capacity,
    /// the error names the bits per sample that would have been needed.
    pub fn embed(&self, carrier: &SampleBuffer, payload: &[u8]) -> Result<(SampleBuffer, UsageReport)> {
        self.ensure_fits_width(carrier)?;
        let capacity = self.capacity(carrier);
        if payload.len() > capacity {
            return Err(self.capacity_exceeded(payload.len(), carrier.len()));
        }
        debug!(
            "hiding {} B in {} samples with {} LSBs each",
            payload.len(),
            carrier.len(),
            self.bits_per_sample
        );

        let mut samples = carrier.samples().to_vec();
        let mut cursor = 0;
        for chunk in BitPacker::new(payload, self.bits_per_sample as u32, LittleEndian) {
            while cursor < samples.len() && carrier.is_sentinel(samples[cursor]) {
                cursor += 1;
            }
            let Some(sample) = samples.get_mut(cursor) else {
                // sentinels ate into the nominal capacity
                return Err(self.capacity_exceeded(payload.len(), carrier.usable_samples()));
            };
            MediaPrimitiveMut::AudioSample(sample).hide_bits(chunk, self.bits_per_sample);
            cursor += 1;
        }

        let report = UsageReport {
            used: payload.len(),
            capacity,
        };
        info!("{report}");

        Ok((carrier.with_samples(samples), report))
    }

    /// Recovers `byte_count` bytes, reading no more samples than needed.
    pub fn extract(&self, carrier: &SampleBuffer, byte_count: usize) -> Result<Vec<u8>> {
        self.ensure_fits_width(carrier)?;
        let available = carrier.usable_samples() * self.bits_per_sample as usize / 8;
        if byte_count > available {
            return Err(StegError::InsufficientCarrierData {
                requested: byte_count,
                available,
            });
        }

        let mut unpacker = BitUnpacker::new(byte_count, self.bits_per_sample as u32, LittleEndian);
        for &sample in carrier.samples().iter().filter(|&&s| !carrier.is_sentinel(s)) {
            if unpacker.is_complete() {
                break;
            }
            unpacker.push(MediaPrimitive::AudioSample(sample).unveil_bits(self.bits_per_sample))?;
        }
        debug!("recovered {byte_count} B with {} LSBs each", self.bits_per_sample);

        Ok(unpacker.into_bytes())
    }

    /// an 8 bit sample has only 7 bits of magnitude
    fn ensure_fits_width(&self, carrier: &SampleBuffer) -> Result<()> {
        let magnitude_bits = carrier.width().magnitude_bits();
        if self.bits_per_sample > magnitude_bits {
            return Err(StegError::InvalidParameter(format!(
                "{}-bit samples can carry at most {magnitude_bits} bits each, got {}",
                carrier.width().bits(),
                self.bits_per_sample
            )));
        }

        Ok(())
    }

    fn capacity_exceeded(&self, payload_size: usize, samples: usize) -> StegError {
        StegError::CapacityExceeded {
            payload_size,
            capacity: samples * self.bits_per_sample as usize / 8,
            required_bits_per_sample: (payload_size * 8).div_ceil(samples.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: [i16; 8] = [-32768, 100, -100, 32767, 0, 5000, -5000, 32766];

    fn mono16(samples: &[i16]) -> SampleBuffer {
        SampleBuffer::new(samples.to_vec(), 1, 16).unwrap()
    }

    /// deterministic noise covering the whole 16 bit range, sentinels included
    fn noise(len: usize) -> Vec<i16> {
        let mut state: u32 = 0x2545_F491;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                if state % 97 == 0 {
                    i16::MIN
                } else {
                    state as i16
                }
            })
            .collect()
    }

    #[test]
    fn should_reject_bits_per_sample_out_of_range() {
        for bits in [0, 9, 16] {
            assert!(matches!(
                LsbCodec::new(bits),
                Err(StegError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn should_embed_the_documented_example() {
        let codec = LsbCodec::new(2).unwrap();
        let (secret, report) = codec.embed(&mono16(&EXAMPLE), &[0xAB]).unwrap();

        assert_eq!(
            secret.samples(),
            &[-32768, 103, -102, 32766, 2, 5000, -5000, 32766]
        );
        assert_eq!(report, UsageReport { used: 1, capacity: 2 });
        assert_eq!(report.to_string(), "Using 1 B out of 2 B");
        assert_eq!(codec.extract(&secret, 1).unwrap(), vec![0xAB]);
    }

    #[test]
    fn should_round_trip_with_every_bit_depth() {
        let carrier = mono16(&noise(4096));
        let payload: Vec<u8> = (0..=255).collect();

        for bits in 1..=8 {
            let codec = LsbCodec::new(bits).unwrap();
            let (secret, _) = codec.embed(&carrier, &payload).unwrap();

            assert_eq!(
                codec.extract(&secret, payload.len()).unwrap(),
                payload,
                "bits_per_sample={bits}"
            );
        }
    }

    #[test]
    fn should_accept_exactly_the_capacity() {
        let carrier = mono16(&[1; 12]);
        let codec = LsbCodec::new(3).unwrap();
        let capacity = codec.capacity(&carrier);
        assert_eq!(capacity, 4);

        let payload = vec![0xC3; capacity];
        let (secret, _) = codec.embed(&carrier, &payload).unwrap();
        assert_eq!(codec.extract(&secret, capacity).unwrap(), payload);

        match codec.embed(&carrier, &vec![0xC3; capacity + 1]) {
            Err(StegError::CapacityExceeded {
                payload_size,
                capacity,
                required_bits_per_sample,
            }) => {
                assert_eq!(payload_size, 5);
                assert_eq!(capacity, 4);
                assert_eq!(required_bits_per_sample, 4);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn should_not_truncate_when_sentinels_eat_the_capacity() {
        let carrier = mono16(&[i16::MIN, i16::MIN, 7, 7]);
        let codec = LsbCodec::new(4).unwrap();

        assert!(matches!(
            codec.embed(&carrier, &[0xFF, 0xFF]),
            Err(StegError::CapacityExceeded { capacity: 1, .. })
        ));
    }

    #[test]
    fn should_leave_sentinels_and_signs_alone() {
        let original = noise(2048);
        let carrier = mono16(&original);
        let payload = b"sign and sentinel preserving payload".repeat(6);

        for bits in 1..=8 {
            let codec = LsbCodec::new(bits).unwrap();
            let (secret, _) = codec.embed(&carrier, &payload).unwrap();

            for (before, after) in original.iter().zip(secret.samples()) {
                if *before == i16::MIN {
                    assert_eq!(after, before);
                } else {
                    assert!(!(*before < 0 && *after > 0), "{before} became {after}");
                    assert!(!(*before > 0 && *after < 0), "{before} became {after}");
                }
            }
        }
    }

    #[test]
    fn should_copy_samples_after_the_payload_verbatim() {
        let original = noise(512);
        let carrier = mono16(&original);
        let (secret, _) = LsbCodec::new(8).unwrap().embed(&carrier, b"abc").unwrap();

        let last_touched = original
            .iter()
            .enumerate()
            .filter(|(_, &s)| s != i16::MIN)
            .nth(2)
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(secret.samples()[last_touched + 1..], original[last_touched + 1..]);
    }

    #[test]
    fn should_refuse_to_read_past_the_carrier() {
        let carrier = mono16(&[i16::MIN, 1, 2, 3, 4]);
        let codec = LsbCodec::new(2).unwrap();

        assert_eq!(codec.extract(&carrier, 1).unwrap().len(), 1);
        assert!(matches!(
            codec.extract(&carrier, 2),
            Err(StegError::InsufficientCarrierData {
                requested: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn should_respect_the_8_bit_sentinel_and_magnitude() {
        let carrier = SampleBuffer::new(vec![-128, 5, -5, 127, 0, -1, 64, -64], 2, 8).unwrap();
        let codec = LsbCodec::new(7).unwrap();
        let (secret, _) = codec.embed(&carrier, &[0x5A, 0x3C]).unwrap();

        assert_eq!(secret.samples()[0], -128);
        assert!(secret.samples().iter().all(|s| (-128..=127).contains(s)));
        assert_eq!(codec.extract(&secret, 2).unwrap(), vec![0x5A, 0x3C]);

        assert!(matches!(
            LsbCodec::new(8).unwrap().embed(&carrier, &[1]),
            Err(StegError::InvalidParameter(_))
        ));
    }

    #[test]
    fn should_treat_an_empty_payload_as_a_plain_copy() {
        let carrier = mono16(&EXAMPLE);
        let (secret, report) = LsbCodec::new(1).unwrap().embed(&carrier, &[]).unwrap();

        assert_eq!(secret, carrier);
        assert_eq!(report.used, 0);
        assert!(LsbCodec::new(1).unwrap().extract(&secret, 0).unwrap().is_empty());
    }
}
