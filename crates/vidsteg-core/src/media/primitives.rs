/// wrap the low level data types that carries information
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioSample(i16),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<i16> for MediaPrimitive {
    fn from(value: i16) -> Self {
        MediaPrimitive::AudioSample(value)
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioSample(&'a mut i16),
}

pub trait HideBits {
    /// stores the low `bits` bits of `chunk`
    fn hide_bits(self, chunk: u8, bits: u8);
}

pub trait UnveilBits {
    /// reads back what `HideBits::hide_bits` stored
    fn unveil_bits(self, bits: u8) -> u8;
}

fn low_mask(bits: u8) -> u16 {
    (1 << bits) - 1
}

impl HideBits for MediaPrimitiveMut<'_> {
    fn hide_bits(self, chunk: u8, bits: u8) {
        match self {
            // a color channel carries exactly one bit as its parity.
            // Parity is fixed by stepping down, only 0 has to step up to 1.
            MediaPrimitiveMut::ImageColorChannel(c) => {
                let odd = chunk & 1 == 1;
                if (*c % 2 == 1) != odd {
                    *c = if *c == 0 { 1 } else { *c - 1 };
                }
            }
            // sign-magnitude: the bits replace the low bits of the absolute value
            MediaPrimitiveMut::AudioSample(s) => {
                let magnitude = (s.unsigned_abs() & !low_mask(bits)) | chunk as u16;
                let magnitude = magnitude as i16;
                *s = if *s < 0 { -magnitude } else { magnitude };
            }
        }
    }
}

impl UnveilBits for MediaPrimitive {
    fn unveil_bits(self, bits: u8) -> u8 {
        match self {
            MediaPrimitive::ImageColorChannel(c) => c & 1,
            MediaPrimitive::AudioSample(s) => (s.unsigned_abs() & low_mask(bits)) as u8,
        }
    }
}
