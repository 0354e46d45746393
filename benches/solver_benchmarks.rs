use std::collections::{BTreeMap, BTreeSet};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regina::{
    model::ConstraintModel,
    puzzle::{Cell, PuzzleSpec, RegionId},
    solver::engine::SolverEngine,
};

/// N regions, region i = the whole of row i. Solvable for every n except 2
/// and 3, and ambiguous for most sizes, which makes it a decent stress case:
/// region clauses give the propagator nothing the row clauses didn't.
fn rows_as_regions(n: usize) -> PuzzleSpec {
    let regions: BTreeMap<RegionId, BTreeSet<Cell>> = (0..n)
        .map(|row| {
            (
                RegionId(row as u32),
                (0..n).map(|col| Cell::new(row, col)).collect(),
            )
        })
        .collect();
    PuzzleSpec::new(n, regions).expect("rows-as-regions partition is valid")
}

fn solve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Queens Solve");

    for n in [6, 8, 10].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let model = ConstraintModel::build(&rows_as_regions(n));
            let engine = SolverEngine::new();
            b.iter(|| {
                let (outcome, _stats) = engine.solve(black_box(&model)).unwrap();
                assert!(outcome.placement().is_some());
            });
        });
    }
    group.finish();
}

fn uniqueness_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Queens Uniqueness Check");
    let n = 8;
    let model = ConstraintModel::build(&rows_as_regions(n));

    group.bench_function("N=8, first solution", |b| {
        let engine = SolverEngine::new();
        b.iter(|| {
            let (outcome, _stats) = engine.solve(black_box(&model)).unwrap();
            assert!(outcome.placement().is_some());
        });
    });

    group.bench_function("N=8, uniqueness check", |b| {
        let engine = SolverEngine::new().with_uniqueness_check();
        b.iter(|| {
            let (outcome, _stats) = engine.solve(black_box(&model)).unwrap();
            let _ = black_box(outcome);
        });
    });

    group.finish();
}

criterion_group!(benches, solve_benchmark, uniqueness_benchmark);
criterion_main!(benches);
