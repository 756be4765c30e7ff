// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Algorithm precondition failures.
//!
//! Unlike [`crate::errors::ParseError`], these are not protocol errors: a refusal is a
//! valid, expected outcome for some inputs (a disconnected graph has no Euler circuit).
//! The algorithm Active Object renders the refusal as a normal response body and routes
//! it through the sender, exactly like a success outcome.

use thiserror::Error;

/// A precondition that an algorithm strategy checked and found unmet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmRefusal {
    /// Euler: the graph is disconnected among its non-isolated vertices.
    #[error("No Euler circuit: graph is disconnected among non-isolated vertices.")]
    EulerDisconnected,

    /// Euler: at least one vertex has odd degree.
    #[error("No Euler circuit: {odd_count} vertices have odd degree.")]
    EulerOddDegree {
        /// Number of vertices with odd degree.
        odd_count: usize,
    },

    /// MST: vertex 0 cannot reach every other vertex (some vertex is isolated or the
    /// graph is disconnected).
    #[error("MST: graph is not connected (no spanning tree)")]
    MstNotConnected,

    /// Hamilton: `V < 3`, the graph is disconnected among non-isolated vertices, or some
    /// vertex has degree < 2.
    #[error("No Hamiltonian cycle.")]
    NoHamiltonCycle,
}

impl AlgorithmRefusal {
    /// Renders the refusal's wire-protocol body, terminated by a single newline.
    pub fn to_wire_body(&self) -> String {
        format!("{}\n", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_degree_renders_the_count() {
        let refusal = AlgorithmRefusal::EulerOddDegree { odd_count: 4 };
        assert_eq!(
            refusal.to_wire_body(),
            "No Euler circuit: 4 vertices have odd degree.\n"
        );
    }

    #[test]
    fn mst_not_connected_matches_wire_text() {
        assert_eq!(
            AlgorithmRefusal::MstNotConnected.to_wire_body(),
            "MST: graph is not connected (no spanning tree)\n"
        );
    }
}
