// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while reading and validating a client's request header and edge list.
//!
//! Every variant renders, via `Display`, the exact `ERR ...` line the wire protocol
//! sends back to the client before closing the socket. The text is part of the
//! protocol contract, not incidental formatting — changing a message changes the
//! protocol.

use thiserror::Error;

/// Errors detected by the request parser before a `Graph` exists.
///
/// These are always written directly to the client socket by the accepting thread;
/// the sender Active Object is never involved, since no algorithm has run yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The header line had too few whitespace-separated tokens to be either request shape.
    #[error(
        "usage:\n  <ALGO> <E> <V> <SEED> [-p]\n  <ALGO> GRAPH <E> <V> [-p]  (then E lines: u v [w])"
    )]
    MalformedHeader,

    /// Token 0 was not one of the five supported algorithm names.
    #[error("unknown ALGO. Supported: EULER MST MAXCLIQUE COUNTCLQ3P HAMILTON")]
    UnknownAlgorithm,

    /// Random-mode header had the wrong token count, or explicit-mode header had the
    /// wrong token count, for its shape.
    #[error("usage: {shape}")]
    WrongTokenCount {
        /// The usage fragment for whichever shape was being parsed.
        shape: &'static str,
    },

    /// `E`, `V`, or `SEED` failed to parse as an integer of the expected width/signedness.
    #[error("bad params.")]
    BadParams,

    /// Explicit-mode `E`/`V` failed to parse as integers.
    #[error("bad <E> or <V>")]
    BadEdgeCountOrVertexCount,

    /// A trailing token was present but was not exactly `-p`.
    #[error("bad flag. Use -p or omit.")]
    BadFlag,

    /// `V < 1` or `E < 0`.
    #[error("invalid: V >= 1, E >= 0")]
    OutOfRange,

    /// `E` exceeded `V*(V-1)/2`, the maximum possible edge count for a simple graph.
    #[error("invalid: E <= V*(V-1)/2 (max={max_edges})")]
    TooManyEdges {
        /// `V*(V-1)/2` for the requested `V`.
        max_edges: i64,
    },

    /// Fewer than `E` edge lines arrived before the client closed the connection.
    #[error("expected {expected} edge lines; got {got}")]
    TruncatedEdgeList {
        /// The `E` declared in the header.
        expected: i32,
        /// The number of edge lines actually read before EOF.
        got: i32,
    },

    /// An edge line did not contain at least two whitespace-separated tokens.
    #[error("edge line format: u v [w]")]
    MalformedEdgeLine,

    /// An edge line's `u`/`v` tokens did not parse as integers.
    #[error("edge endpoints")]
    BadEdgeEndpoints,

    /// An edge's optional weight token parsed but was not a positive integer.
    #[error("weight must be positive")]
    NonPositiveWeight,

    /// An edge referenced an out-of-range vertex, or was a self-loop.
    #[error("invalid edge {index}: ({u},{v})")]
    InvalidEdge {
        /// The zero-based index of the offending edge line.
        index: i32,
        u: i32,
        v: i32,
    },
}

impl ParseError {
    /// Renders the full wire-protocol line, including the leading `ERR ` marker.
    pub fn to_wire_line(&self) -> String {
        format!("ERR {}\n", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_line_has_err_prefix_and_trailing_newline() {
        let line = ParseError::UnknownAlgorithm.to_wire_line();
        assert!(line.starts_with("ERR "));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn too_many_edges_reports_the_computed_max() {
        let err = ParseError::TooManyEdges { max_edges: 6 };
        assert_eq!(err.to_string(), "invalid: E <= V*(V-1)/2 (max=6)");
    }

    #[test]
    fn invalid_edge_reports_index_and_endpoints() {
        let err = ParseError::InvalidEdge { index: 2, u: 5, v: 5 };
        assert_eq!(err.to_string(), "invalid edge 2: (5,5)");
    }
}
