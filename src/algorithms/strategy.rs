// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The algorithm tag and the `Strategy` trait the factory dispatches on.

use crate::graph::Graph;
use std::fmt;

/// One of the five algorithms a client may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgoTag {
    Euler,
    Mst,
    MaxClique,
    CountClq3p,
    Hamilton,
}

impl AlgoTag {
    /// Parses the wire-protocol algorithm token. Case-sensitive, matching the reference.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "EULER" => Some(Self::Euler),
            "MST" => Some(Self::Mst),
            "MAXCLIQUE" => Some(Self::MaxClique),
            "COUNTCLQ3P" => Some(Self::CountClq3p),
            "HAMILTON" => Some(Self::Hamilton),
            _ => None,
        }
    }

    /// The canonical wire-protocol spelling, also used to name the algorithm's Active
    /// Object in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euler => "EULER",
            Self::Mst => "MST",
            Self::MaxClique => "MAXCLIQUE",
            Self::CountClq3p => "COUNTCLQ3P",
            Self::Hamilton => "HAMILTON",
        }
    }
}

impl fmt::Display for AlgoTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An executable algorithm. Implementors own their precondition checks and produce the
/// complete response body text (success or diagnostic failure) directly — there is no
/// further error path once a `Strategy` starts running, matching §7's treatment of
/// `AlgorithmRefusal` as a normal diagnostic body rather than a parse-time error.
pub trait Strategy: Send + Sync {
    fn tag(&self) -> AlgoTag;
    fn execute(&self, graph: &Graph) -> String;
}
