use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_editor::{parse_curve_file, write_curve_file, CurveModel};
use glam::DVec2;
use std::hint::black_box;

fn build_curve(point_count: usize) -> CurveModel {
    let positions: Vec<DVec2> = (0..point_count)
        .map(|i| {
            let x = i as f64 / (point_count - 1) as f64;
            let y = 0.5 + 0.4 * (x * 7.0).sin();
            DVec2::new(x, y)
        })
        .collect();
    CurveModel::from_positions(&positions)
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");

    for &point_count in &[5usize, 50usize] {
        let curve = build_curve(point_count);
        for &samples in &[200usize, 1000usize] {
            group.bench_with_input(
                BenchmarkId::new(format!("{point_count}_points"), samples),
                &samples,
                |b, &samples| b.iter(|| black_box(curve.interpolate(black_box(samples)).len())),
            );
        }
    }

    group.finish();
}

fn bench_curve_file(c: &mut Criterion) {
    let curve = build_curve(20);
    let sampled = curve.interpolate(1000);
    let content = write_curve_file(&curve.positions(), &sampled);

    c.bench_function("curve_file_write_1000", |b| {
        b.iter(|| black_box(write_curve_file(&curve.positions(), &sampled).len()))
    });

    c.bench_function("curve_file_parse_1000", |b| {
        b.iter(|| {
            let file = parse_curve_file(black_box(&content)).expect("Parsen fehlgeschlagen");
            black_box(file.points.len())
        })
    });
}

criterion_group!(benches, bench_interpolation, bench_curve_file);
criterion_main!(benches);
