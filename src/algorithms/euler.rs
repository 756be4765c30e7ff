// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Eulerian circuit via Hierholzer's algorithm.

use crate::errors::AlgorithmRefusal;
use crate::graph::Graph;

/// Runs the full precondition check and, if it passes, Hierholzer's algorithm.
pub fn run(graph: &Graph) -> Result<String, AlgorithmRefusal> {
    if !graph.connected_among_non_isolated() {
        return Err(AlgorithmRefusal::EulerDisconnected);
    }
    if !graph.all_even_degrees() {
        let odd_count = (0..graph.vertex_count())
            .filter(|&v| graph.degree(v) % 2 != 0)
            .count();
        return Err(AlgorithmRefusal::EulerOddDegree { odd_count });
    }

    let sequence = hierholzer(graph);
    let joined = sequence
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    Ok(format!(
        "Euler circuit exists. Sequence of vertices:\n{joined}\n"
    ))
}

/// Destructive-workspace Hierholzer: copies the adjacency counts and degrees, then walks
/// an explicit stack, always descending into the smallest-index unused neighbor and
/// appending to the circuit only on backtrack (pop). The preconditions (connected,
/// all-even-degree) must already hold.
fn hierholzer(graph: &Graph) -> Vec<usize> {
    let v_count = graph.vertex_count();
    let mut remaining = vec![vec![0u32; v_count]; v_count];
    let mut deg = vec![0usize; v_count];
    for u in 0..v_count {
        deg[u] = graph.degree(u);
        for v in 0..v_count {
            if graph.has_edge(u, v) {
                remaining[u][v] = 1;
            }
        }
    }

    let start = (0..v_count).find(|&v| deg[v] > 0).unwrap_or(0);
    let mut stack = vec![start];
    let mut circuit = Vec::new();

    while let Some(&u) = stack.last() {
        if deg[u] > 0 {
            let v = (0..v_count)
                .find(|&v| remaining[u][v] > 0)
                .expect("deg[u] > 0 implies a remaining neighbor exists");
            remaining[u][v] -= 1;
            remaining[v][u] -= 1;
            deg[u] -= 1;
            deg[v] -= 1;
            stack.push(v);
        } else {
            circuit.push(stack.pop().unwrap());
        }
    }

    circuit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vertex_no_edges_yields_the_trivial_circuit() {
        let g = Graph::create(1).unwrap();
        assert_eq!(
            run(&g).unwrap(),
            "Euler circuit exists. Sequence of vertices:\n0\n"
        );
    }

    #[test]
    fn disconnected_among_non_isolated_is_refused() {
        // Two disjoint triangles: every vertex has even degree, but the graph is
        // disconnected among its (non-isolated) vertices.
        let mut g = Graph::create(6).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 0, 1).unwrap();
        g.add_edge(3, 4, 1).unwrap();
        g.add_edge(4, 5, 1).unwrap();
        g.add_edge(5, 3, 1).unwrap();
        assert_eq!(run(&g), Err(AlgorithmRefusal::EulerDisconnected));
    }

    #[test]
    fn odd_degree_vertices_are_counted_and_reported() {
        let mut g = Graph::create(3).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        match run(&g) {
            Err(AlgorithmRefusal::EulerOddDegree { odd_count }) => assert_eq!(odd_count, 2),
            other => panic!("expected EulerOddDegree, got {other:?}"),
        }
    }

    #[test]
    fn triangle_has_a_circuit_of_length_edge_count_plus_one() {
        let mut g = Graph::create(3).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 0, 1).unwrap();
        let body = run(&g).unwrap();
        let seq_line = body.lines().nth(1).unwrap();
        let seq: Vec<&str> = seq_line.split(" -> ").collect();
        assert_eq!(seq.len(), 4); // E + 1
        assert_eq!(seq.first(), seq.last());
    }
}
