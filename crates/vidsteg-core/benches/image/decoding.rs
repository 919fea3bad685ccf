use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use vidsteg_core::media::image::{decode_range, LsbCodec, PixelGrid};
use vidsteg_core::{FrameRange, Result};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut frame: PixelGrid =
            RgbImage::from_fn(640, 360, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8])).into();
        let secret_message = vec![0x5A; 50 * 1024];
        LsbCodec::hide(&mut frame, 0, &secret_message).expect("Failed to hide 50 KiB");
        let range = FrameRange::new(0, 9).expect("Invalid frame range");

        b.iter(|| {
            let mut load = |_: u32| -> Result<PixelGrid> { Ok(frame.clone()) };
            decode_range(range, &mut load).expect("Failed to decode");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
