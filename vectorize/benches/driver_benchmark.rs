// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate vectorize;
use recycle::{args, params, CallArguments, RecycleError, Row};
use vectorize::{select, Vectorized};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

criterion_group!(benches, criterion_driver_comparison);
criterion_main!(benches);

fn weighted() -> Vectorized<impl Fn(&Row<'_>) -> Result<f64, RecycleError>> {
    Vectorized::new(params![a, b, k, full = true].unwrap(), |row| {
        let value = row.f64("a")? + row.f64("b")? * row.f64("k")?;
        Ok(if row.bool("full")? { value } else { value / 2.0 })
    })
}

fn random_call(len: usize) -> CallArguments {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let strikes: Vec<f64> = (0..len).map(|_| rng.gen_range(50.0..150.0)).collect();
    let flags: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.5)).collect();
    args! { a => 1.0, b => 0.5, k => strikes, full => flags }
}

pub fn criterion_driver_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Element-wise versus column-wise body");
    let f = weighted();
    let call = random_call(10_000);

    group.bench_function("broadcast only", |b| {
        b.iter(|| f.broadcast(black_box(&call)).map(|set| set.len()))
    });
    group.bench_function("per-element body", |b| {
        b.iter(|| f.call_array(black_box(&call)))
    });
    group.bench_function("column-wise body with mask", |b| {
        b.iter(|| {
            f.call_columns(black_box(&call), |cols| {
                let value = cols.f64("a")? + cols.f64("b")? * cols.f64("k")?;
                let halved = &value / 2.0;
                Ok(select(&cols.bool("full")?, &value, &halved).unwrap_or(value))
            })
        })
    });

    group.finish()
}
