// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod algorithm;
mod parse;
mod server;

pub use algorithm::AlgorithmRefusal;
pub use parse::ParseError;
pub use server::ServerError;
