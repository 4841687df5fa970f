// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Receiver kinds and the factory interface used to build them.

use crate::{Component, Error};
use otelcol_config::{DataType, ReceiverConfig, Type};
use otelcol_consumer as consumer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::Span;

/// A component that ingests telemetry from outside the pipeline.
pub trait Receiver: Component {}

/// A receiver forwarding spans to a [`consumer::Traces`].
pub trait TracesReceiver: Receiver {}

/// A receiver forwarding metric points to a [`consumer::Metrics`].
pub trait MetricsReceiver: Receiver {}

/// A receiver forwarding log records to a [`consumer::Logs`].
pub trait LogsReceiver: Receiver {}

/// Describes the collector binary hosting the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Executable name.
    pub command: String,
    /// Human readable description.
    pub description: String,
    /// Version string.
    pub version: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            command: "otelcol".to_string(),
            description: "OpenTelemetry Collector".to_string(),
            version: "latest".to_string(),
        }
    }
}

/// Handles passed to every receiver constructor.
#[derive(Debug, Clone)]
pub struct ReceiverCreateSettings {
    /// Span receivers attach their own events and child spans to.
    pub span: Span,
    /// Information about the hosting binary.
    pub build_info: BuildInfo,
}

impl ReceiverCreateSettings {
    /// Creates settings logging under `span`.
    #[must_use]
    pub fn new(span: Span, build_info: BuildInfo) -> Self {
        Self { span, build_info }
    }
}

impl Default for ReceiverCreateSettings {
    fn default() -> Self {
        Self {
            span: Span::none(),
            build_info: BuildInfo::default(),
        }
    }
}

/// Builds receivers for one configuration type.
///
/// A factory may support any subset of the three signal kinds. Creating a
/// receiver for a kind the factory does not support fails with
/// [`Error::DataTypeIsNotSupported`] before anything is allocated.
pub trait ReceiverFactory: Send + Sync {
    /// Returns the configuration type this factory understands.
    fn config_type(&self) -> &Type;

    /// Returns a fresh default configuration.
    fn create_default_config(&self) -> Box<dyn ReceiverConfig>;

    /// Returns true if receivers can be created for `data_type`.
    fn supports(&self, data_type: DataType) -> bool;

    /// Creates a receiver forwarding spans to `next`.
    fn create_traces_receiver(
        &self,
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Arc<dyn consumer::Traces>,
    ) -> Result<Box<dyn TracesReceiver>, Error>;

    /// Creates a receiver forwarding metric points to `next`.
    fn create_metrics_receiver(
        &self,
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Arc<dyn consumer::Metrics>,
    ) -> Result<Box<dyn MetricsReceiver>, Error>;

    /// Creates a receiver forwarding log records to `next`.
    fn create_logs_receiver(
        &self,
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Arc<dyn consumer::Logs>,
    ) -> Result<Box<dyn LogsReceiver>, Error>;
}
