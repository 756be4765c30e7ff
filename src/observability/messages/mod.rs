// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements:
//!
//! * `Display` - human-readable output for plain-text log formatters.
//! * `StructuredLog` - machine-readable fields plus span creation.
//!
//! # Organization
//!
//! * `connection` - acceptor lifecycle: accepted, leadership handoff, parse rejected.
//! * `dispatch` - a parsed request routed to an algorithm's Active Object.
//! * `algorithm` - an algorithm worker finishing a job, with duration and outcome.
//! * `sender` - the sender Active Object writing a response and closing a socket.
//!
//! # Usage
//!
//! ```
//! use grapheon::observability::messages::{connection::ConnectionAccepted, StructuredLog};
//!
//! let msg = ConnectionAccepted { peer: "127.0.0.1:51422" };
//! msg.log();
//! ```

pub mod algorithm;
pub mod connection;
pub mod dispatch;
pub mod sender;

use tracing::Span;

/// Messages that support structured logging and span creation.
///
/// `log()` emits a `tracing` event carrying both the `Display` text and this message's
/// fields; `span()` opens a named span with those same fields as attributes.
pub trait StructuredLog {
    fn log(&self);
    fn span(&self, name: &str) -> Span;
}
