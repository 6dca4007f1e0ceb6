//! Shared fixture graphs for integration tests.
//!
//! Synthetic graphs with hand-assigned heuristics and small integer
//! weights. The heuristics are not necessarily admissible, so the expected
//! routes asserted over these fixtures were validated by hand.

use aeroroutes_lib::{Graph, VertexId};

/// Add a vertex with a hand-assigned heuristic.
#[allow(dead_code)]
pub fn vertex(graph: &mut Graph, key: &str, heuristic: u64) -> VertexId {
    let id = graph.add_vertex(key).expect("fixture keys are unique");
    graph.set_heuristic(id, heuristic);
    id
}

/// Single vertex "A" with a zero heuristic.
#[allow(dead_code)]
pub fn single_vertex_graph() -> Graph {
    let mut graph = Graph::undirected();
    vertex(&mut graph, "A", 0);
    graph
}

/// Triangle A-B-C, all edges weight 10, no heuristics.
#[allow(dead_code)]
pub fn triangle_graph() -> Graph {
    let mut graph = Graph::undirected();
    let a = vertex(&mut graph, "A", 0);
    let b = vertex(&mut graph, "B", 0);
    let c = vertex(&mut graph, "C", 0);
    graph.add_edge(a, b, 10);
    graph.add_edge(a, c, 10);
    graph.add_edge(b, c, 10);
    graph
}

/// Chain A-B-C-D, 5 per hop, heuristics descending toward D.
#[allow(dead_code)]
pub fn linear_graph() -> Graph {
    let mut graph = Graph::undirected();
    let a = vertex(&mut graph, "A", 30);
    let b = vertex(&mut graph, "B", 20);
    let c = vertex(&mut graph, "C", 10);
    let d = vertex(&mut graph, "D", 0);
    graph.add_edge(a, b, 5);
    graph.add_edge(b, c, 5);
    graph.add_edge(c, d, 5);
    graph
}

/// Ten-vertex branching graph; the cheapest route A to J is A,F,G,I,J at
/// cost 10.
#[allow(dead_code)]
pub fn branching_graph() -> Graph {
    let mut graph = Graph::undirected();
    let a = vertex(&mut graph, "A", 10);
    let b = vertex(&mut graph, "B", 8);
    let c = vertex(&mut graph, "C", 5);
    let d = vertex(&mut graph, "D", 7);
    let e = vertex(&mut graph, "E", 3);
    let f = vertex(&mut graph, "F", 6);
    let g = vertex(&mut graph, "G", 5);
    let h = vertex(&mut graph, "H", 3);
    let i = vertex(&mut graph, "I", 1);
    let j = vertex(&mut graph, "J", 0);

    graph.add_edge(a, b, 6);
    graph.add_edge(a, f, 3);
    graph.add_edge(b, c, 3);
    graph.add_edge(b, d, 2);
    graph.add_edge(c, d, 1);
    graph.add_edge(c, e, 5);
    graph.add_edge(d, e, 8);
    graph.add_edge(e, i, 5);
    graph.add_edge(e, j, 5);
    graph.add_edge(f, g, 1);
    graph.add_edge(f, h, 7);
    graph.add_edge(g, i, 3);
    graph.add_edge(h, i, 2);
    graph.add_edge(i, j, 3);
    graph
}

/// Seven-vertex weighted graph; the cheapest route A to Z is A,C,D,E,Z at
/// cost 17.
#[allow(dead_code)]
pub fn weighted_graph() -> Graph {
    let mut graph = Graph::undirected();
    let a = vertex(&mut graph, "A", 14);
    let b = vertex(&mut graph, "B", 12);
    let c = vertex(&mut graph, "C", 11);
    let d = vertex(&mut graph, "D", 6);
    let e = vertex(&mut graph, "E", 4);
    let f = vertex(&mut graph, "F", 11);
    let z = vertex(&mut graph, "Z", 0);

    graph.add_edge(a, b, 4);
    graph.add_edge(a, c, 3);
    graph.add_edge(b, e, 12);
    graph.add_edge(b, f, 5);
    graph.add_edge(c, d, 7);
    graph.add_edge(c, e, 10);
    graph.add_edge(d, e, 2);
    graph.add_edge(e, z, 5);
    graph
}

/// Map a route of identifiers to the vertex keys for readable assertions.
#[allow(dead_code)]
pub fn route_keys(graph: &Graph, steps: &[VertexId]) -> Vec<String> {
    steps
        .iter()
        .map(|&id| graph.vertex_key(id).to_string())
        .collect()
}
