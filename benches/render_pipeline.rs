use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractal_zoomer::{
    ColourMapKinds, Complex, DEFAULT_JULIA_CONSTANT, Evaluator, FractalKinds, PlaneMapper, Raster,
    Viewport, colour_map_factory, compose_frame, compose_frame_serial,
};
use std::hint::black_box;

fn mapper() -> PlaneMapper {
    let raster = Raster::new(400, 300).unwrap();
    let viewport = Viewport::centered(Complex::new(-1.748, 0.0), 0.01, raster, 0.1).unwrap();

    PlaneMapper::new(&viewport, raster).unwrap()
}

fn bench_compose(c: &mut Criterion) {
    let mapper = mapper();
    let mut group = c.benchmark_group("compose_frame");

    for &family in FractalKinds::ALL {
        let evaluator = Evaluator::for_family(family, 200, DEFAULT_JULIA_CONSTANT).unwrap();
        let colour_map = colour_map_factory(ColourMapKinds::PowerLawRgb, 200);

        group.bench_with_input(BenchmarkId::new("rayon", family), &family, |b, _| {
            b.iter(|| compose_frame(black_box(&mapper), &evaluator, &colour_map, 0xff))
        });
        group.bench_with_input(BenchmarkId::new("serial", family), &family, |b, _| {
            b.iter(|| compose_frame_serial(black_box(&mapper), &evaluator, &colour_map, 0xff))
        });
    }

    group.finish();
}

fn bench_colour_maps(c: &mut Criterion) {
    let mapper = mapper();
    let evaluator = Evaluator::for_family(FractalKinds::Mandelbrot, 200, DEFAULT_JULIA_CONSTANT).unwrap();
    let mut group = c.benchmark_group("colour_map");

    for &kind in ColourMapKinds::ALL {
        let colour_map = colour_map_factory(kind, 200);

        group.bench_function(kind.display_name(), |b| {
            b.iter(|| compose_frame(black_box(&mapper), &evaluator, &colour_map, 0xff))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_colour_maps);
criterion_main!(benches);
