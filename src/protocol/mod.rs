// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The line-oriented wire protocol: reading a header, optionally an explicit edge list,
//! and building the resulting [`Graph`].

pub mod edge_line;
pub mod header;

use crate::errors::ParseError;
use crate::graph::Graph;
use header::{Header, Mode};
use std::io::BufRead;

/// Reads one newline-terminated line and strips the trailing `\n`/`\r\n`. Returns `Ok(None)`
/// on a clean EOF (no bytes read).
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut raw = String::new();
    let bytes_read = reader.read_line(&mut raw)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    while raw.ends_with('\n') || raw.ends_with('\r') {
        raw.pop();
    }
    Ok(Some(raw))
}

/// Reads the header line and, for explicit mode, the `E` edge lines that follow it, then
/// builds the resulting [`Graph`]. Random-mode graphs are generated in-process from the
/// header's `(V, E, SEED)` instead of being read from the socket.
pub fn read_request<R: BufRead>(reader: &mut R) -> Result<(Header, Graph), ParseError> {
    let header_line = read_trimmed_line(reader)
        .map_err(|_| ParseError::MalformedHeader)?
        .ok_or(ParseError::MalformedHeader)?;
    let parsed_header = header::parse(&header_line)?;
    let graph = build_graph(&parsed_header, reader)?;
    Ok((parsed_header, graph))
}

fn build_graph<R: BufRead>(header: &Header, reader: &mut R) -> Result<Graph, ParseError> {
    match header.mode {
        Mode::Random { edge_count, vertex_count, seed } => {
            let mut graph = Graph::create(vertex_count as usize)
                .expect("vertex_count >= 1 already enforced by header validation");
            graph.generate_random(edge_count as usize, seed);
            Ok(graph)
        }
        Mode::Explicit { edge_count, vertex_count } => {
            let mut graph = Graph::create(vertex_count as usize)
                .expect("vertex_count >= 1 already enforced by header validation");
            for i in 0..edge_count {
                let line = read_trimmed_line(reader)
                    .map_err(|_| ParseError::TruncatedEdgeList { expected: edge_count, got: i })?
                    .ok_or(ParseError::TruncatedEdgeList { expected: edge_count, got: i })?;
                let edge = edge_line::parse(&line, i, vertex_count)?;
                // Duplicate edges are silently ignored; every other `add_edge` failure
                // mode was already excluded by `edge_line::parse`'s own validation.
                let _ = graph.add_edge(edge.u as usize, edge.v as usize, edge.weight);
            }
            Ok(graph)
        }
    }
}
