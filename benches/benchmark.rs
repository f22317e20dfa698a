use adjacency_graph::{Edge, Graph};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};

fn gen_graph(n: usize, k: usize) -> Graph<usize> {
    let mut rng = thread_rng();
    let mut graph: Graph<usize> = Graph::from((0..n).collect::<Vec<_>>());
    for _ in 0..k {
        let (u, v) = (rng.gen_range(0..n), rng.gen_range(0..n));
        graph.add_edge(Edge::new(u, v)).unwrap();
    }
    graph
}

fn bm_add_edge(c: &mut Criterion) {
    c.bench_function("add_edge 1000x5000", |b| b.iter(|| gen_graph(1000, 5000)));
}

fn bm_neighbors(c: &mut Criterion) {
    c.bench_function("neighbors_for_index", |b| {
        let graph = gen_graph(1000, 5000);
        b.iter(|| {
            let k = thread_rng().gen_range(0..1000);
            graph.neighbors_for_index(k).map(|n| n.len())
        })
    });
}

fn bm_index_of(c: &mut Criterion) {
    c.bench_function("index_of", |b| {
        let graph = gen_graph(1000, 0);
        b.iter(|| {
            let k = thread_rng().gen_range(0..1000);
            graph.index_of(&k)
        })
    });
}

criterion_group!(benches, bm_add_edge, bm_neighbors, bm_index_of);
criterion_main!(benches);
