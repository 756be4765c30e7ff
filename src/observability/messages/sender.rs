// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The sender Active Object writing a response and closing the client socket.

use super::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A response was fully written and the socket closed.
pub struct ResponseSent<'a> {
    pub peer: &'a str,
    pub bytes_written: usize,
}

impl Display for ResponseSent<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "sent {} bytes to {}, closing", self.bytes_written, self.peer)
    }
}

impl StructuredLog for ResponseSent<'_> {
    fn log(&self) {
        tracing::info!(peer = self.peer, bytes_written = self.bytes_written, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "response_sent",
            span_name = name,
            peer = self.peer,
            bytes_written = self.bytes_written,
        )
    }
}

/// Writing the response failed partway through; the socket is closed regardless.
pub struct SendFailed<'a> {
    pub peer: &'a str,
    pub error: &'a std::io::Error,
}

impl Display for SendFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "failed to send response to {}: {}", self.peer, self.error)
    }
}

impl StructuredLog for SendFailed<'_> {
    fn log(&self) {
        tracing::warn!(peer = self.peer, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("send_failed", span_name = name, peer = self.peer)
    }
}
