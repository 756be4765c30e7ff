// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Startup and socket-level errors surfaced to `main`.

use thiserror::Error;

/// Errors that prevent the server from starting, or that abort a single connection.
#[derive(Error, Debug)]
pub enum ServerError {
    /// CLI arguments were missing or malformed. Maps to exit code 2.
    #[error("usage: server <port> [threads]")]
    UsageError,

    /// The port argument was out of the valid 1..65535 range or not an integer.
    #[error("invalid port: {0}")]
    InvalidPort(String),

    /// Binding or listening on the configured port failed. Maps to exit code 1.
    #[error("failed to set up listening socket on port {port}: {source}")]
    SocketSetup {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// A per-connection I/O failure. Never propagates past the connection that caused it.
    #[error("socket I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// The process exit code `main` should return for this error, per §6's CLI contract:
    /// 2 for an argument error, 1 for a socket setup failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ServerError::UsageError | ServerError::InvalidPort(_) => 2,
            ServerError::SocketSetup { .. } | ServerError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_and_invalid_port_exit_with_code_two() {
        assert_eq!(ServerError::UsageError.exit_code(), 2);
        assert_eq!(ServerError::InvalidPort("abc".into()).exit_code(), 2);
    }

    #[test]
    fn socket_setup_failure_exits_with_code_one() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        assert_eq!(ServerError::SocketSetup { port: 9000, source }.exit_code(), 1);
    }
}
