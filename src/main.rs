// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use grapheon::cli::ServerConfig;
use grapheon::server::Server;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match ServerConfig::parse(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    tracing::info!(port = config.port, threads = config.threads, "grapheon listening");
    server.run()
}
