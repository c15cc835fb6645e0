use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use d2r_sprite::{bgra_to_rgba, decode_all, decode_frame, decode_image, parse_header};
use std::hint::black_box;

/// Builds a sprite with a byte pattern filling the whole strip.
fn create_sprite(total_width: u32, height: u32, frame_count: u32) -> Vec<u8> {
    let payload = total_width as usize * height as usize * 4;
    let mut data = vec![0u8; 40 + payload];
    data[0..4].copy_from_slice(b"SpA1");
    data[4..6].copy_from_slice(&1u16.to_le_bytes());
    data[8..12].copy_from_slice(&total_width.to_le_bytes());
    data[12..16].copy_from_slice(&height.to_le_bytes());
    data[20..24].copy_from_slice(&frame_count.to_le_bytes());
    for (i, byte) in data[40..].iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sprite Decode");

    // Animation strip: 51 frames of 88x20.
    let strip = create_sprite(88 * 51, 20, 51);
    let strip_header = parse_header(&strip).unwrap();
    group.throughput(Throughput::Bytes((strip.len() - 40) as u64));

    group.bench_function("decode_frame (88x20, 51 frames)", |b| {
        b.iter(|| {
            for index in 0..strip_header.frame_count {
                black_box(decode_frame(black_box(&strip), &strip_header, index).unwrap());
            }
        })
    });

    group.bench_function("decode_all (88x20, 51 frames)", |b| {
        b.iter(|| black_box(decode_all(black_box(&strip), &strip_header).unwrap()))
    });

    // Large single frame.
    let single = create_sprite(1171, 1505, 1);
    group.throughput(Throughput::Bytes((single.len() - 40) as u64));

    group.bench_function("decode_image (1171x1505)", |b| {
        b.iter(|| black_box(decode_image(black_box(&single)).unwrap()))
    });

    group.bench_function("bgra_to_rgba (1171x1505)", |b| {
        b.iter(|| black_box(bgra_to_rgba(black_box(&single[40..])).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
