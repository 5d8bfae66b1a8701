use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_encode::encoder::config::EncodeOptions;
use rust_qr_encode::encoder::reed_solomon::ReedSolomonEncoder;
use rust_qr_encode::{encode_with_options, render_with_options};

fn bench_encode_small(c: &mut Criterion) {
    let options = EncodeOptions::default();
    c.bench_function("encode_hello_v1", |b| {
        b.iter(|| encode_with_options(black_box("HELLO"), &options))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let options = EncodeOptions::default();
    let url = "https://example.com/pairing?token=".to_string() + &"a1b2c3d4".repeat(16);
    c.bench_function("encode_url_v8", |b| {
        b.iter(|| encode_with_options(black_box(&url), &options))
    });
}

fn bench_encode_max(c: &mut Criterion) {
    let payload = vec![0x5Au8; 2953];
    for (name, parallel) in [("encode_v40_parallel", true), ("encode_v40_serial", false)] {
        let options = EncodeOptions {
            parallel_masks: parallel,
            ..EncodeOptions::default()
        };
        c.bench_function(name, |b| {
            b.iter(|| encode_with_options(black_box(&payload), &options))
        });
    }
}

fn bench_reed_solomon(c: &mut Criterion) {
    let encoder = ReedSolomonEncoder::new(30);
    let block = vec![0xA7u8; 118];
    c.bench_function("rs_block_118_30", |b| {
        b.iter(|| encoder.encode_block(black_box(&block)))
    });
}

fn bench_render(c: &mut Criterion) {
    let options = EncodeOptions::default();
    c.bench_function("render_280px", |b| {
        b.iter(|| render_with_options(black_box("ws://192.168.1.10:18789/pair"), 280, &options))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_url,
    bench_encode_max,
    bench_reed_solomon,
    bench_render
);
criterion_main!(benches);
