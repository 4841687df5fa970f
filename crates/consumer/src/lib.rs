// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Downstream consumer contracts.
//!
//! A receiver decodes data from an external source and forwards it to the next
//! pipeline stage through one of the consumer traits defined here, one per
//! signal kind.

use async_trait::async_trait;

pub mod error;
pub mod payload;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Error;
pub use payload::{LogsPayload, MetricsPayload, TracesPayload};

/// What a consumer does with the payloads it receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Set when the consumer modifies payloads in place, in which case the
    /// caller must hand over a copy it no longer needs.
    pub mutates_data: bool,
}

/// Accepts trace payloads.
#[async_trait]
pub trait Traces: Send + Sync {
    /// Returns the capabilities of this consumer.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Accepts one trace payload.
    async fn consume_traces(&self, traces: TracesPayload) -> Result<(), Error>;
}

/// Accepts metric payloads.
#[async_trait]
pub trait Metrics: Send + Sync {
    /// Returns the capabilities of this consumer.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Accepts one metric payload.
    async fn consume_metrics(&self, metrics: MetricsPayload) -> Result<(), Error>;
}

/// Accepts log payloads.
#[async_trait]
pub trait Logs: Send + Sync {
    /// Returns the capabilities of this consumer.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Accepts one log payload.
    async fn consume_logs(&self, logs: LogsPayload) -> Result<(), Error>;
}
