// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability: centralized message types for structured logging.
//!
//! Message types follow a struct-based pattern with `Display` for human-readable output
//! and [`messages::StructuredLog`] for machine-readable fields, so:
//!
//! * Magic strings don't get scattered across the connection/dispatch/algorithm/sender
//!   code paths.
//! * Fields stay queryable regardless of which `tracing` subscriber formats them.
//! * Each subsystem's messages live in one place.

pub mod messages;
