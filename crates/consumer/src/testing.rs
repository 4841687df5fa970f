// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory consumers for tests.

use crate::{Error, Logs, LogsPayload, Metrics, MetricsPayload, Traces, TracesPayload};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Consumer that records every payload it receives.
#[derive(Debug)]
pub struct Sink<T> {
    received: Mutex<Vec<T>>,
}

impl<T: Clone> Sink<T> {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every payload received so far, in arrival order.
    #[must_use]
    pub fn all(&self) -> Vec<T> {
        self.received.lock().clone()
    }

    /// Returns how many payloads were received.
    #[must_use]
    pub fn count(&self) -> usize {
        self.received.lock().len()
    }

    /// Forgets every payload received so far.
    pub fn reset(&self) {
        self.received.lock().clear();
    }

    fn record(&self, payload: T) {
        self.received.lock().push(payload);
    }
}

impl<T: Clone> Default for Sink<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Traces for Sink<TracesPayload> {
    async fn consume_traces(&self, traces: TracesPayload) -> Result<(), Error> {
        self.record(traces);
        Ok(())
    }
}

#[async_trait]
impl Metrics for Sink<MetricsPayload> {
    async fn consume_metrics(&self, metrics: MetricsPayload) -> Result<(), Error> {
        self.record(metrics);
        Ok(())
    }
}

#[async_trait]
impl Logs for Sink<LogsPayload> {
    async fn consume_logs(&self, logs: LogsPayload) -> Result<(), Error> {
        self.record(logs);
        Ok(())
    }
}

/// Consumer that accepts and drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nop;

#[async_trait]
impl Traces for Nop {
    async fn consume_traces(&self, _traces: TracesPayload) -> Result<(), Error> {
        Ok(())
    }
}

#[async_trait]
impl Metrics for Nop {
    async fn consume_metrics(&self, _metrics: MetricsPayload) -> Result<(), Error> {
        Ok(())
    }
}

#[async_trait]
impl Logs for Nop {
    async fn consume_logs(&self, _logs: LogsPayload) -> Result<(), Error> {
        Ok(())
    }
}
