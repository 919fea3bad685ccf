use criterion::{criterion_group, criterion_main, Criterion};
use vidsteg_core::media::audio::{LsbCodec, SampleBuffer};

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding to memory", |b| {
        let samples = (0..441_000)
            .map(|i| ((i as f64 * 0.03).sin() * 20_000.0) as i16)
            .collect::<Vec<i16>>();
        let carrier = SampleBuffer::new(samples, 2, 16).expect("Cannot create carrier");
        let codec = LsbCodec::new(2).expect("Cannot create codec");
        let secret_message = vec![0xA5; 64 * 1024];

        b.iter(|| {
            codec
                .embed(&carrier, &secret_message)
                .expect("Cannot embed into carrier");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
