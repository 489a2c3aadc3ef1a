use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use recant::{ConstraintId, EnumValue, Solver, ValueRef, VariableId};

#[derive(Debug)]
struct Num(usize);

impl EnumValue for Num {
    fn label(&self) -> String {
        self.0.to_string()
    }
}

fn make_values(n: usize) -> Vec<ValueRef> {
    (0..n).map(|i| ValueRef::new(Num(i))).collect()
}

/// A chain v0 = v1 = … = v(len-1), each variable over the same values.
fn build_equality_chain(
    len: usize,
    values: &[ValueRef],
) -> (Solver, Vec<VariableId>, Vec<ConstraintId>) {
    let mut solver = Solver::new();
    let vars: Vec<VariableId> = (0..len)
        .map(|_| solver.new_var(values.iter().cloned()).unwrap())
        .collect();
    let links: Vec<ConstraintId> = vars
        .windows(2)
        .map(|pair| {
            let link = solver.new_equal(pair[0], pair[1]);
            solver.add(link).unwrap();
            link
        })
        .collect();
    (solver, vars, links)
}

fn bench_equality_chain_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality_chain_propagation");
    for size in [10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let values = make_values(8);
                    let (mut solver, vars, _) = build_equality_chain(size, &values);
                    assert!(solver.propagate());
                    let pin = solver.new_assign(vars[0], values[0].clone()).unwrap();
                    solver.add(pin).unwrap();
                    solver
                },
                |mut solver| {
                    assert!(black_box(solver.propagate()));
                    solver
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_retract_and_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("retract_and_replay");
    for size in [10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let values = make_values(8);
                    let (mut solver, vars, links) = build_equality_chain(size, &values);
                    let pin = solver.new_assign(vars[0], values[0].clone()).unwrap();
                    solver.add(pin).unwrap();
                    assert!(solver.propagate());
                    (solver, links[links.len() / 2])
                },
                |(mut solver, link)| {
                    solver.retract(link).unwrap();
                    assert!(black_box(solver.propagate()));
                    solver
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_distinct_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_clique");
    for size in [4usize, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    // A clique of pairwise-distinct variables over exactly
                    // `size` values: propagation cascades once seeded.
                    let values = make_values(size);
                    let mut solver = Solver::new();
                    let vars: Vec<VariableId> = (0..size)
                        .map(|_| solver.new_var(values.iter().cloned()).unwrap())
                        .collect();
                    for i in 0..vars.len() {
                        for j in (i + 1)..vars.len() {
                            let pair = solver.new_distinct(vars[i], vars[j]);
                            solver.add(pair).unwrap();
                        }
                    }
                    assert!(solver.propagate());
                    for (i, &var) in vars.iter().enumerate().skip(1) {
                        let pin = solver.new_assign(var, values[i].clone()).unwrap();
                        solver.add(pin).unwrap();
                    }
                    solver
                },
                |mut solver| {
                    assert!(black_box(solver.propagate()));
                    solver
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_equality_chain_propagation,
    bench_retract_and_replay,
    bench_distinct_grid
);
criterion_main!(benches);
