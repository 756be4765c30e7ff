// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command-line configuration: `server <port> [threads]`.
//!
//! No external argument-parsing crate is pulled in here — the surface is two positional
//! values, matching both the reference's minimal CLI and the teacher's own hand-rolled
//! `main.rs` argument handling.

use crate::errors::ServerError;

/// Parsed, validated server configuration. Not part of the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub threads: usize,
}

impl ServerConfig {
    /// Parses `args` (excluding the program name, i.e. `&args[1..]` of `std::env::args()`).
    ///
    /// `threads`, when omitted, defaults to the number of online CPUs (minimum 1), via
    /// [`std::thread::available_parallelism`].
    pub fn parse(args: &[String]) -> Result<Self, ServerError> {
        if args.is_empty() || args.len() > 2 {
            return Err(ServerError::UsageError);
        }

        let port: u16 = args[0]
            .parse()
            .map_err(|_| ServerError::InvalidPort(args[0].clone()))?;
        if port == 0 {
            return Err(ServerError::InvalidPort(args[0].clone()));
        }

        let threads = match args.get(1) {
            Some(raw) => raw.parse::<usize>().map_err(|_| ServerError::UsageError)?,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };
        let threads = threads.max(1);

        Ok(Self { port, threads })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert!(matches!(ServerConfig::parse(&[]), Err(ServerError::UsageError)));
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        let args = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        assert!(matches!(ServerConfig::parse(&args), Err(ServerError::UsageError)));
    }

    #[test]
    fn port_only_defaults_threads_to_at_least_one() {
        let args = vec!["8080".to_string()];
        let config = ServerConfig::parse(&args).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.threads >= 1);
    }

    #[test]
    fn port_and_threads_are_both_honored() {
        let args = vec!["8080".to_string(), "6".to_string()];
        let config = ServerConfig::parse(&args).unwrap();
        assert_eq!(config, ServerConfig { port: 8080, threads: 6 });
    }

    #[test]
    fn a_non_numeric_port_is_rejected() {
        let args = vec!["not-a-port".to_string()];
        match ServerConfig::parse(&args) {
            Err(ServerError::InvalidPort(reported)) => assert_eq!(reported, "not-a-port"),
            other => panic!("expected InvalidPort, got {other:?}"),
        }
    }

    #[test]
    fn port_zero_is_rejected() {
        let args = vec!["0".to_string()];
        assert!(matches!(ServerConfig::parse(&args), Err(ServerError::InvalidPort(_))));
    }
}
