use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use stereocam_bridge::camera_pipeline::{
    map, source_to_view, ExportConfig, FrameWriter, MatType, MemoryLocation, SourceMat,
    StandardTiffWriter, TiffCompression,
};

fn benchmark_map_by_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_by_type");

    let types = vec![
        (MatType::U8_C1, "U8_C1"),
        (MatType::U8_C4, "U8_C4"),
        (MatType::F32_C1, "F32_C1"),
        (MatType::F32_C4, "F32_C4"),
    ];

    for (mat_type, label) in types {
        let mat = SourceMat::new(1280, 720, mat_type, MemoryLocation::Cpu).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &mat, |b, mat| {
            b.iter(|| {
                let view = map(black_box(mat.descriptor()), black_box(mat.host_data())).unwrap();
                black_box(view.as_ptr());
            });
        });
    }

    group.finish();
}

fn benchmark_snapshot_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_compression");
    let mat = SourceMat::new(672, 376, MatType::U8_C4, MemoryLocation::Cpu).unwrap();
    let view = source_to_view(&mat).unwrap();

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateFast, "deflate_fast"),
    ];

    for (compression, label) in compressions {
        let config = ExportConfig::builder().compression(compression).build();
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut output = Vec::new();
                StandardTiffWriter.write_view(&view, &mut output, &config).unwrap();
                black_box(output);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map_by_type, benchmark_snapshot_compression);
criterion_main!(benches);
