// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Counting all cliques of size >= 3 via Bron–Kerbosch *without* pivoting.
//!
//! Pivoting restricts enumeration to maximal cliques; counting every clique (including
//! non-maximal ones contained in a larger one) requires visiting every candidate in `P`,
//! so pivoting is deliberately not used here, unlike [`crate::algorithms::max_clique`].

use crate::errors::AlgorithmRefusal;
use crate::graph::bitset::Bitset;
use crate::graph::neighbors::NeighborMasks;
use crate::graph::Graph;

/// Counts every clique of size >= 3. Never refuses.
pub fn run(graph: &Graph) -> Result<String, AlgorithmRefusal> {
    let v_count = graph.vertex_count();
    let masks = NeighborMasks::build(graph);

    let mut all = Bitset::new(v_count);
    for v in 0..v_count {
        all.set(v);
    }

    let mut count: u64 = 0;
    enumerate(Bitset::new(v_count), all, &masks, &mut count);
    Ok(format!("Number of cliques (size >= 3): {count}\n"))
}

/// At every recursive entry, records `R` if it already qualifies, then iterates the
/// candidates of `P` in ascending order, removing each from `P` before recursing so that
/// every clique is produced by exactly one ascending sequence of extensions.
fn enumerate(r: Bitset, mut p: Bitset, masks: &NeighborMasks, count: &mut u64) {
    if r.cardinality() >= 3 {
        *count += 1;
    }

    let candidates: Vec<usize> = p.iter_set_bits().collect();
    for v in candidates {
        p.clear(v);
        let mut r_next = r.clone();
        r_next.set(v);
        let p_next = p.intersection(masks.of(v));
        enumerate(r_next, p_next, masks, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_free_graph_counts_zero() {
        let mut g = Graph::create(4).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g.add_edge(3, 0, 1).unwrap();
        assert_eq!(run(&g).unwrap(), "Number of cliques (size >= 3): 0\n");
    }

    #[test]
    fn k4_counts_five_cliques() {
        let mut g = Graph::create(4).unwrap();
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v, 1).unwrap();
            }
        }
        // C(4,3) + C(4,4) = 4 + 1 = 5
        assert_eq!(run(&g).unwrap(), "Number of cliques (size >= 3): 5\n");
    }

    #[test]
    fn a_single_triangle_counts_one() {
        let mut g = Graph::create(3).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 0, 1).unwrap();
        assert_eq!(run(&g).unwrap(), "Number of cliques (size >= 3): 1\n");
    }
}
