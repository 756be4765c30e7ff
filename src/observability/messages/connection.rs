// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Acceptor/connection lifecycle: accepted, leadership handoff, parse rejected.

use super::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A worker became leader and is now blocked in `accept`.
pub struct BecameLeader<'a> {
    pub worker: &'a str,
}

impl Display for BecameLeader<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} became leader, entering accept()", self.worker)
    }
}

impl StructuredLog for BecameLeader<'_> {
    fn log(&self) {
        tracing::debug!(worker = self.worker, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("leadership", span_name = name, worker = self.worker)
    }
}

/// A connection was accepted and leadership has already been handed to a follower.
pub struct ConnectionAccepted<'a> {
    pub peer: &'a str,
}

impl Display for ConnectionAccepted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "accepted connection from {}", self.peer)
    }
}

impl StructuredLog for ConnectionAccepted<'_> {
    fn log(&self) {
        tracing::info!(peer = self.peer, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("connection", span_name = name, peer = self.peer)
    }
}

/// The header or edge list failed to parse; an `ERR` line was written and the socket
/// will be closed without reaching any algorithm worker.
pub struct RequestRejected<'a> {
    pub peer: &'a str,
    pub reason: &'a str,
}

impl Display for RequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "rejected request from {}: {}", self.peer, self.reason)
    }
}

impl StructuredLog for RequestRejected<'_> {
    fn log(&self) {
        tracing::warn!(peer = self.peer, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "request_rejected",
            span_name = name,
            peer = self.peer,
            reason = self.reason,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_accepted_renders_the_peer() {
        let msg = ConnectionAccepted { peer: "127.0.0.1:1234" };
        assert_eq!(msg.to_string(), "accepted connection from 127.0.0.1:1234");
    }

    #[test]
    fn request_rejected_renders_peer_and_reason() {
        let msg = RequestRejected { peer: "127.0.0.1:1234", reason: "bad params." };
        assert_eq!(
            msg.to_string(),
            "rejected request from 127.0.0.1:1234: bad params."
        );
    }
}
