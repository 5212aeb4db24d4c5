use criterion::{black_box, criterion_group, criterion_main, Criterion};

use signmag_fixed::{sim, FixedValue, SimConfig};

fn bench_mul(c: &mut Criterion) {
    let a = FixedValue::from_float(-123.456);
    let b = FixedValue::from_float(7.875);

    c.bench_function("mul_shift_add", |bench| {
        bench.iter(|| black_box(a) * black_box(b))
    });
    c.bench_function("mul_widening", |bench| {
        bench.iter(|| black_box(a).widening_mul(black_box(b)))
    });
    c.bench_function("div", |bench| {
        bench.iter(|| black_box(a) / black_box(b))
    });
}

fn bench_format(c: &mut Criterion) {
    let v = FixedValue::from_float(-2.71828);
    c.bench_function("to_decimal_string", |bench| {
        bench.iter(|| black_box(v).to_decimal_string(4))
    });
}

fn bench_sim(c: &mut Criterion) {
    let config = SimConfig {
        report_interval: 0,
        ..SimConfig::default()
    };
    c.bench_function("sim_600_steps", |bench| {
        bench.iter(|| sim::run(black_box(&config)))
    });
}

criterion_group!(benches, bench_mul, bench_format, bench_sim);
criterion_main!(benches);
