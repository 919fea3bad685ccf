use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use vidsteg_core::media::image::{embed_range, PixelGrid};
use vidsteg_core::{FrameRange, Result};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding to memory", |b| {
        let frame: PixelGrid =
            RgbImage::from_fn(640, 360, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8])).into();
        let range = FrameRange::new(0, 9).expect("Invalid frame range");
        let secret_message = vec![0x5A; 500 * 1024];

        b.iter(|| {
            let mut load = |_: u32| -> Result<PixelGrid> { Ok(frame.clone()) };
            let mut save = |_: u32, _: &PixelGrid| -> Result<()> { Ok(()) };
            embed_range(range, &mut load, &mut save, &secret_message)
                .expect("Failed to hide 500 KiB");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
