//! Benchmarks for the tekton pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tekton::{
    build_theme, export_to_dtcg, export_to_tailwind, generate_colour_scale,
    generate_css_variables, Anchor, BrandSpec, Colour, CssOptions, Step, TailwindOptions,
    TokenEngine,
};

fn brand() -> BrandSpec {
    BrandSpec {
        name: "bench".to_string(),
        anchors: vec![Anchor::new("primary", Colour { l: 0.5, c: 0.15, h: 220.0 })],
        ..BrandSpec::default()
    }
}

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    let anchor = Colour { l: 0.5, c: 0.15, h: 220.0 };

    group.bench_function("colour_scale", |b| {
        b.iter(|| generate_colour_scale(black_box(anchor), Step::S500))
    });

    let spec = brand();
    group.bench_function("full_theme", |b| {
        b.iter(|| build_theme(black_box(&spec)).unwrap())
    });

    group.finish();
}

// -- Export benchmarks --

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let theme = build_theme(&brand()).unwrap();

    group.bench_function("css", |b| {
        b.iter(|| generate_css_variables(black_box(&theme.light), &CssOptions::default()))
    });

    group.bench_function("tailwind", |b| {
        b.iter(|| export_to_tailwind(black_box(&theme.light), None, &TailwindOptions::default()))
    });

    group.bench_function("dtcg", |b| {
        b.iter(|| export_to_dtcg(black_box(&theme.light), theme.dark.as_ref()))
    });

    group.finish();
}

// -- Cache benchmarks --

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");

    let spec = brand();

    group.bench_function("engine_cold", |b| {
        b.iter(|| {
            let mut engine = TokenEngine::default();
            engine.generate(black_box(&spec)).unwrap()
        })
    });

    let mut warm = TokenEngine::default();
    warm.generate(&spec).unwrap();
    group.bench_function("engine_warm", |b| {
        b.iter(|| warm.generate(black_box(&spec)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_export, bench_cache);
criterion_main!(benches);
