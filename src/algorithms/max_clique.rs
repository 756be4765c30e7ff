// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Maximum clique via Bron–Kerbosch with pivoting over bitset neighborhoods.

use crate::errors::AlgorithmRefusal;
use crate::graph::bitset::Bitset;
use crate::graph::neighbors::NeighborMasks;
use crate::graph::Graph;

/// Finds one maximum clique. Never refuses: the empty graph has a (trivial) maximum
/// clique of size 0 or 1.
pub fn run(graph: &Graph) -> Result<String, AlgorithmRefusal> {
    let v_count = graph.vertex_count();
    let masks = NeighborMasks::build(graph);

    let mut all = Bitset::new(v_count);
    for v in 0..v_count {
        all.set(v);
    }

    let mut best: Vec<usize> = Vec::new();
    search(Bitset::new(v_count), all, Bitset::new(v_count), &masks, &mut best);

    let mut body = format!("Max clique size = {}\n", best.len());
    if !best.is_empty() {
        let vertices = best
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        body.push_str(&format!("Vertices: {vertices}\n"));
    }
    Ok(body)
}

/// Classical pivoted Bron–Kerbosch; `R`, `P`, `X` are taken by value at each call. Only
/// maximal cliques are visited, which is exactly what a maximum clique search needs.
fn search(r: Bitset, mut p: Bitset, mut x: Bitset, masks: &NeighborMasks, best: &mut Vec<usize>) {
    if p.is_empty() && x.is_empty() {
        if r.cardinality() > best.len() {
            *best = r.iter_set_bits().collect();
        }
        return;
    }

    let mut pivot_pool = p.clone();
    pivot_pool.union_with(&x);
    let Some(pivot) = pivot_pool
        .iter_set_bits()
        .max_by_key(|&u| p.intersection(masks.of(u)).cardinality())
    else {
        return;
    };

    let candidates: Vec<usize> = p.difference(masks.of(pivot)).iter_set_bits().collect();
    for v in candidates {
        let mut r_next = r.clone();
        r_next.set(v);
        let p_next = p.intersection(masks.of(v));
        let x_next = x.intersection(masks.of(v));
        search(r_next, p_next, x_next, masks, best);
        p.clear(v);
        x.set(v);
    }
}
