/// pixels that carry one character
pub(crate) const PIXELS_PER_CHARACTER: usize = 3;

/// color channel values that carry one character, 8 data bits and the terminator flag
pub(crate) const CHANNELS_PER_CHARACTER: usize = 3 * PIXELS_PER_CHARACTER;

/// Cursor over the color channels of a frame buffer, one character slot at a time.
///
/// Every step yields the byte offsets of R, G and B of the next 3 pixels in row-major order,
/// the alpha channel is never part of it. A trailing group of less than 3 pixels is not used.
pub(crate) struct CharacterSlots {
    stride: usize,
    next_pixel: usize,
    pixel_count: usize,
}

impl CharacterSlots {
    pub fn new(pixel_count: usize, stride: usize) -> Self {
        Self {
            stride,
            next_pixel: 0,
            pixel_count,
        }
    }
}

impl Iterator for CharacterSlots {
    type Item = [usize; CHANNELS_PER_CHARACTER];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_pixel + PIXELS_PER_CHARACTER > self.pixel_count {
            return None;
        }
        let first = self.next_pixel * self.stride;
        let mut offsets = [0; CHANNELS_PER_CHARACTER];
        for (i, offset) in offsets.iter_mut().enumerate() {
            *offset = first + (i / 3) * self.stride + i % 3;
        }
        self.next_pixel += PIXELS_PER_CHARACTER;

        Some(offsets)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.pixel_count - self.next_pixel) / PIXELS_PER_CHARACTER;
        (left, Some(left))
    }
}
