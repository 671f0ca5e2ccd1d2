use bls12_381_signatures::elliptic_curve::short_weierstrass::curves::bls12_381::field_extension::FpE;
use bls12_381_signatures::elliptic_curve::short_weierstrass::curves::bls12_381::scalar_field::FrE;
use bls12_381_signatures::traits::ByteConversion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::RngCore;

fn random_fp() -> FpE {
    let mut buf = [0_u8; 48];
    rand::thread_rng().fill_bytes(&mut buf);
    buf[0] &= 0x1a;
    FpE::from_bytes_be(&buf).unwrap_or_else(|_| FpE::from(1_u64))
}

fn fp_benchmarks(c: &mut Criterion) {
    let a = random_fp();
    let b = random_fp();

    c.bench_function("Fp | mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
    c.bench_function("Fp | add", |bencher| {
        bencher.iter(|| black_box(&a) + black_box(&b));
    });
    c.bench_function("Fp | square", |bencher| {
        bencher.iter(|| black_box(&a).square());
    });
    c.bench_function("Fp | inv", |bencher| {
        bencher.iter(|| black_box(&a).inv().unwrap());
    });
    c.bench_function("Fp | sqrt", |bencher| {
        bencher.iter(|| black_box(&a).square().sqrt());
    });
}

fn fr_benchmarks(c: &mut Criterion) {
    let a = FrE::from(12345_u64);
    let b = FrE::from(67890_u64);

    c.bench_function("Fr | mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
    c.bench_function("Fr | inv", |bencher| {
        bencher.iter(|| black_box(&a).inv().unwrap());
    });
}

criterion_group!(benches, fp_benchmarks, fr_benchmarks);
criterion_main!(benches);
