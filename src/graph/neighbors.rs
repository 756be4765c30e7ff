// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Precomputed per-vertex neighborhood bitmasks, used by the clique algorithms.

use super::bitset::Bitset;
use super::Graph;

/// `mask[v]` has bit `u` set exactly when `adjacency[v][u]`.
///
/// Computed once per algorithm invocation that needs it (the two clique strategies),
/// so repeated `P ∩ N(v)` style operations during Bron–Kerbosch recursion are O(nwords)
/// bitset operations instead of O(V) adjacency-matrix scans.
pub struct NeighborMasks {
    masks: Vec<Bitset>,
}

impl NeighborMasks {
    pub fn build(graph: &Graph) -> Self {
        let v = graph.vertex_count();
        let mut masks = Vec::with_capacity(v);
        for u in 0..v {
            let mut mask = Bitset::new(v);
            for w in 0..v {
                if graph.has_edge(u, w) {
                    mask.set(w);
                }
            }
            masks.push(mask);
        }
        Self { masks }
    }

    /// The neighborhood bitset for vertex `v`.
    pub fn of(&self, v: usize) -> &Bitset {
        &self.masks[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_reflect_adjacency() {
        let mut g = Graph::create(4).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();

        let masks = NeighborMasks::build(&g);
        assert_eq!(masks.of(0).iter_set_bits().collect::<Vec<_>>(), vec![1]);
        assert_eq!(masks.of(1).iter_set_bits().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(masks.of(3).iter_set_bits().collect::<Vec<_>>(), vec![]);
    }
}
