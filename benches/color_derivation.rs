use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swatch_forge::{
    ColorConverter, HarmonyRule, PaletteDeriver, Rgb, ShadeTintDeriver, StepNormalization,
};

fn benchmark_conversion(c: &mut Criterion) {
    let converter = ColorConverter::new();

    c.bench_function("hex_to_rgb", |b| {
        b.iter(|| converter.hex_to_rgb(black_box("#3498db")))
    });

    c.bench_function("rgb_hsl_round_trip", |b| {
        b.iter(|| {
            let hsl = converter.rgb_to_hsl(black_box(Rgb::new(52, 152, 219)));
            converter.hsl_to_rgb(hsl)
        })
    });
}

fn benchmark_derivation(c: &mut Criterion) {
    let base = Rgb::new(52, 152, 219);
    let palettes = PaletteDeriver::new();
    let shades = ShadeTintDeriver::with_normalization(StepNormalization::Even);

    c.bench_function("palette_all_rules", |b| {
        b.iter(|| {
            for rule in HarmonyRule::ALL {
                black_box(palettes.derive(black_box(base), rule));
            }
        })
    });

    c.bench_function("shades_ten_steps", |b| {
        b.iter(|| shades.derive(black_box(base), 10))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_derivation);
criterion_main!(benches);
