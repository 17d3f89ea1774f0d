use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use curve25519::{
    CompressedEdwardsY, EdwardsPoint, FieldElement, Scalar, decode_point, scalar_mult_base,
};
use hex_literal::hex;
use std::hint::black_box;

const SCALAR: [u8; 32] = hex!("307c83864f2833cb427a2ef1c00a013cfdff2768d980c0a3a520f006904de94f");
const POINT: [u8; 32] = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

pub fn field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    let x = FieldElement::from_bytes(&SCALAR);
    let y = FieldElement::from_bytes(&POINT);

    group.bench_function("mul", |b| b.iter(|| black_box(x) * black_box(y)));
    group.bench_function("square", |b| b.iter(|| black_box(x).square()));
    group.bench_function("invert", |b| b.iter(|| black_box(x).invert()));
    group.bench_function("pow_p58", |b| b.iter(|| black_box(x).pow_p58()));
    group.bench_function("to_bytes", |b| b.iter(|| black_box(x).to_bytes()));

    group.finish();
}

pub fn ed25519(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ed25519");

    group.bench_function("scalar_mult_base", |b| {
        b.iter_batched(
            || Scalar::from_bytes(&SCALAR),
            |scalar| scalar_mult_base(&scalar),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("point addition", |b| {
        b.iter_batched(
            || {
                let p1 = scalar_mult_base(&Scalar::from_bytes(&SCALAR));
                (p1, EdwardsPoint::GENERATOR)
            },
            |(p1, p2)| p1 + p2,
            BatchSize::SmallInput,
        )
    });

    group.bench_function("compress", |b| {
        b.iter_batched(
            || scalar_mult_base(&Scalar::from_bytes(&SCALAR)),
            |point| point.compress().0,
            BatchSize::SmallInput,
        )
    });

    group.bench_function("decompress", |b| {
        b.iter_batched(
            || POINT,
            |bytes| CompressedEdwardsY(bytes).decompress(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("decode_point", |b| b.iter(|| decode_point(black_box(&POINT))));

    group.finish();
}

criterion_group!(benches, field, ed25519);
criterion_main!(benches);
