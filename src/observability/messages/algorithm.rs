// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! An algorithm worker finishing a job: duration and outcome.

use super::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// An algorithm worker finished computing a response body.
pub struct AlgorithmCompleted<'a> {
    pub algorithm: &'a str,
    pub duration: Duration,
    pub outcome: &'a str,
}

impl Display for AlgorithmCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} completed in {:?}: {}",
            self.algorithm, self.duration, self.outcome
        )
    }
}

impl StructuredLog for AlgorithmCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            algorithm = self.algorithm,
            duration_ms = self.duration.as_millis() as u64,
            outcome = self.outcome,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "algorithm_completed",
            span_name = name,
            algorithm = self.algorithm,
            duration_ms = self.duration.as_millis() as u64,
            outcome = self.outcome,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_completed_renders_duration_and_outcome() {
        let msg = AlgorithmCompleted {
            algorithm: "EULER",
            duration: Duration::from_millis(7),
            outcome: "success",
        };
        assert!(msg.to_string().starts_with("EULER completed in"));
        assert!(msg.to_string().ends_with("success"));
    }
}
