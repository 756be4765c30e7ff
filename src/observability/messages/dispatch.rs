// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A parsed, validated request being routed to its algorithm's Active Object.

use super::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A request has been dispatched to the named algorithm's queue.
pub struct RequestDispatched<'a> {
    pub algorithm: &'a str,
    pub vertex_count: usize,
    pub edge_count: usize,
}

impl Display for RequestDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "dispatched to {}: V={}, E={}",
            self.algorithm, self.vertex_count, self.edge_count
        )
    }
}

impl StructuredLog for RequestDispatched<'_> {
    fn log(&self) {
        tracing::info!(
            algorithm = self.algorithm,
            vertex_count = self.vertex_count,
            edge_count = self.edge_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch",
            span_name = name,
            algorithm = self.algorithm,
            vertex_count = self.vertex_count,
            edge_count = self.edge_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_dispatched_renders_algorithm_and_sizes() {
        let msg = RequestDispatched { algorithm: "MST", vertex_count: 4, edge_count: 4 };
        assert_eq!(msg.to_string(), "dispatched to MST: V=4, E=4");
    }
}
