use criterion::{criterion_group, criterion_main, Criterion};
use vidsteg_core::media::audio::{LsbCodec, SampleBuffer};

pub fn audio_decoding(c: &mut Criterion) {
    c.bench_function("Audio Decoding", |b| {
        let samples = (0..441_000)
            .map(|i| ((i as f64 * 0.03).sin() * 20_000.0) as i16)
            .collect::<Vec<i16>>();
        let carrier = SampleBuffer::new(samples, 2, 16).expect("Cannot create carrier");
        let codec = LsbCodec::new(2).expect("Cannot create codec");
        let (secret, _) = codec
            .embed(&carrier, b"Hello World!")
            .expect("Cannot embed into carrier");

        b.iter(|| {
            codec
                .extract(&secret, 64 * 1024)
                .expect("Failed to extract 64 KiB");
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
