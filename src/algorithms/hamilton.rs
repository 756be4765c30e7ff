// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Hamiltonian cycle search by backtracking, with degree-based pruning.

use crate::errors::AlgorithmRefusal;
use crate::graph::Graph;

/// Searches for a Hamiltonian cycle starting and ending at vertex 0.
pub fn run(graph: &Graph) -> Result<String, AlgorithmRefusal> {
    let v_count = graph.vertex_count();
    if v_count < 3
        || !graph.connected_among_non_isolated()
        || (0..v_count).any(|u| graph.degree(u) < 2)
    {
        return Err(AlgorithmRefusal::NoHamiltonCycle);
    }

    let mut path = vec![0usize];
    let mut used = vec![false; v_count];
    used[0] = true;

    if backtrack(graph, &mut path, &mut used, v_count) {
        path.push(0);
        let joined = path
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        Ok(format!("Hamiltonian cycle found:\n{joined}\n"))
    } else {
        Err(AlgorithmRefusal::NoHamiltonCycle)
    }
}

/// Fills `path` positions `1..V` with neighbors of the previous vertex, tried in
/// ascending index order, pruning candidates of degree < 2. At full length, succeeds
/// only if the last vertex closes the cycle back to vertex 0.
fn backtrack(graph: &Graph, path: &mut Vec<usize>, used: &mut [bool], v_count: usize) -> bool {
    if path.len() == v_count {
        return graph.has_edge(*path.last().unwrap(), 0);
    }

    let last = *path.last().unwrap();
    for candidate in 0..v_count {
        if used[candidate] || graph.degree(candidate) < 2 || !graph.has_edge(last, candidate) {
            continue;
        }
        used[candidate] = true;
        path.push(candidate);
        if backtrack(graph, path, used, v_count) {
            return true;
        }
        path.pop();
        used[candidate] = false;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_three_vertices_is_refused() {
        let g = Graph::create(2).unwrap();
        assert_eq!(run(&g), Err(AlgorithmRefusal::NoHamiltonCycle));
    }

    #[test]
    fn a_four_cycle_is_its_own_hamiltonian_cycle() {
        let mut g = Graph::create(4).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g.add_edge(3, 0, 1).unwrap();
        assert_eq!(
            run(&g).unwrap(),
            "Hamiltonian cycle found:\n0 -> 1 -> 2 -> 3 -> 0\n"
        );
    }

    #[test]
    fn a_star_graph_has_no_hamiltonian_cycle() {
        let mut g = Graph::create(4).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(0, 3, 1).unwrap();
        assert_eq!(run(&g), Err(AlgorithmRefusal::NoHamiltonCycle));
    }
}
