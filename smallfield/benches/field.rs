//! Field element benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use smallfield::FieldElement;

const MODULUS: i64 = 9_223_372_036_854_775_783;

fn test_field_element_x() -> FieldElement {
    FieldElement::new(0x1ccb_e91c_075f_c7f4, MODULUS)
}

fn test_field_element_y() -> FieldElement {
    FieldElement::new(0x4e40_14c6_8811_f9a2, MODULUS)
}

fn bench_field_element_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = core::hint::black_box(test_field_element_x());
    let y = core::hint::black_box(test_field_element_y());
    group.bench_function("mul", |b| b.iter(|| x * y));
}

fn bench_field_element_square<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = core::hint::black_box(test_field_element_x());
    group.bench_function("square", |b| b.iter(|| x.square()));
}

fn bench_field_element_pow<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = core::hint::black_box(test_field_element_x());
    group.bench_function("pow", |b| b.iter(|| x.pow(0x0123_4567_89ab_cdef)));
}

fn bench_field_element_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = core::hint::black_box(test_field_element_x());
    group.bench_function("invert", |b| b.iter(|| x.invert()));
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    bench_field_element_mul(&mut group);
    bench_field_element_square(&mut group);
    bench_field_element_pow(&mut group);
    bench_field_element_invert(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
