use criterion::{criterion_group, criterion_main, Criterion};
use flightroute_lib::{
    find_shortest_route, AdjacencyListGraph, AvlTree, CostMetric, Graph, RouteNetwork, Tree,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

static NETWORK: Lazy<RouteNetwork> =
    Lazy::new(|| RouteNetwork::load(&fixture_path()).expect("fixture loads"));

/// 30x30 directed grid where every cell links right and down.
static GRID: Lazy<AdjacencyListGraph<u32, u32>> = Lazy::new(|| {
    const SIDE: u32 = 30;
    let mut graph = AdjacencyListGraph::directed();
    for cell in 0..SIDE * SIDE {
        graph.add_vertex(cell).expect("vertex added");
    }
    for cell in 0..SIDE * SIDE {
        if cell % SIDE + 1 < SIDE {
            graph
                .add_edge_weight(&cell, &(cell + 1), 1 + cell % 7)
                .expect("edge added");
        }
        if cell + SIDE < SIDE * SIDE {
            graph
                .add_edge_weight(&cell, &(cell + SIDE), 1 + cell % 5)
                .expect("edge added");
        }
    }
    graph
});

fn benchmark_structures(c: &mut Criterion) {
    c.bench_function("avl_insert_sequential_1k", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for value in 0..1_000u32 {
                tree.add(black_box(value));
            }
            black_box(tree.height().expect("non-empty"))
        });
    });

    c.bench_function("dijkstra_grid_corner_to_corner", |b| {
        let graph = &*GRID;
        b.iter(|| {
            let route = find_shortest_route(graph, &0, &899, CostMetric::Duration)
                .expect("endpoints exist")
                .expect("route exists");
            black_box(route.total_cost)
        });
    });

    c.bench_function("network_plan_lhr_fco_price", |b| {
        let network = &*NETWORK;
        b.iter(|| {
            let plan = network
                .plan_route("LHR", "FCO", CostMetric::Price)
                .expect("route exists");
            black_box(plan.stops)
        });
    });
}

criterion_group!(benches, benchmark_structures);
criterion_main!(benches);
