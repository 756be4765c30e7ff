// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Strategy factory: maps an [`AlgoTag`] to its executable [`Strategy`].

use super::strategy::{AlgoTag, Strategy};
use super::{count_cliques, euler, hamilton, max_clique, mst};
use crate::errors::AlgorithmRefusal;
use crate::graph::Graph;

macro_rules! leaf_strategy {
    ($name:ident, $tag:expr, $module:path) => {
        struct $name;
        impl Strategy for $name {
            fn tag(&self) -> AlgoTag {
                $tag
            }
            fn execute(&self, graph: &Graph) -> String {
                render($module(graph))
            }
        }
    };
}

fn render(result: Result<String, AlgorithmRefusal>) -> String {
    match result {
        Ok(body) => body,
        Err(refusal) => refusal.to_wire_body(),
    }
}

leaf_strategy!(EulerStrategy, AlgoTag::Euler, euler::run);
leaf_strategy!(MstStrategy, AlgoTag::Mst, mst::run);
leaf_strategy!(MaxCliqueStrategy, AlgoTag::MaxClique, max_clique::run);
leaf_strategy!(CountClq3pStrategy, AlgoTag::CountClq3p, count_cliques::run);
leaf_strategy!(HamiltonStrategy, AlgoTag::Hamilton, hamilton::run);

/// Looks up the strategy for an algorithm tag. Every [`AlgoTag`] variant has exactly one
/// strategy, so this never fails — unknown algorithm *names* are rejected earlier, at
/// parse time, before an `AlgoTag` even exists.
pub fn strategy_for(tag: AlgoTag) -> Box<dyn Strategy> {
    match tag {
        AlgoTag::Euler => Box::new(EulerStrategy),
        AlgoTag::Mst => Box::new(MstStrategy),
        AlgoTag::MaxClique => Box::new(MaxCliqueStrategy),
        AlgoTag::CountClq3p => Box::new(CountClq3pStrategy),
        AlgoTag::Hamilton => Box::new(HamiltonStrategy),
    }
}
