use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use faregraph_core::prelude::*;

/// Square grid of `side * side` places with 4-neighbour links
fn grid_network(side: usize) -> TransportGraph {
    let mut graph = TransportGraph::with_capacity(side * side, 2 * side * side);
    let name = |row: usize, col: usize| format!("{row}:{col}");

    for row in 0..side {
        for col in 0..side {
            let weight = ((row * 7 + col * 13) % 11 + 1) as f64;
            if col + 1 < side {
                graph.add_edge(&name(row, col), &name(row, col + 1), weight, 10.0 + weight);
            }
            if row + 1 < side {
                graph.add_edge(&name(row, col), &name(row + 1, col), weight * 1.5, 12.0);
            }
        }
    }
    graph
}

fn bench_reference(c: &mut Criterion) {
    let graph = reference_network();

    c.bench_function("reference_shortest_path_fare", |b| {
        b.iter(|| graph.shortest_path(black_box("Tagoloan"), black_box("Indahag"), Metric::Fare));
    });

    c.bench_function("reference_statistics", |b| {
        b.iter(|| black_box(&graph).network_statistics());
    });
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for side in [10, 30, 60] {
        let graph = grid_network(side);
        let corner = format!("{0}:{0}", side - 1);

        group.bench_with_input(BenchmarkId::new("shortest_path", side), &side, |b, _| {
            b.iter(|| graph.shortest_path("0:0", black_box(&corner), Metric::Distance));
        });

        group.bench_with_input(BenchmarkId::new("all_shortest_paths", side), &side, |b, _| {
            b.iter(|| graph.all_shortest_paths(black_box("0:0"), Metric::Fare));
        });
    }

    let graph = grid_network(30);
    let places: Vec<String> = (0..30).map(|i| format!("{i}:{i}")).collect();
    group.bench_function("cost_matrix_30", |b| {
        b.iter(|| graph.cost_matrix(black_box(&places), Metric::Distance));
    });

    group.finish();
}

criterion_group!(benches, bench_reference, bench_grid);
criterion_main!(benches);
