// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Component contracts for the collector.
//!
//! Defines the lifecycle shared by every pipeline component, the receiver
//! kinds, the [`ReceiverFactory`] interface the pipeline builder uses to
//! instantiate receivers, and the [`ReceiverFactories`] registry.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub mod error;
pub mod receiver;
// The link-time slice declaration expands to link sections.
#[allow(unsafe_code)]
pub mod registry;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Error;
pub use receiver::{
    BuildInfo, LogsReceiver, MetricsReceiver, Receiver, ReceiverCreateSettings, ReceiverFactory,
    TracesReceiver,
};
pub use registry::{RECEIVER_FACTORIES, ReceiverFactories};

/// Services the running pipeline offers to its components.
pub trait Host: Send + Sync {
    /// Reports an error the component cannot recover from. The host decides
    /// how to shut the pipeline down.
    fn report_fatal_error(&self, error: Error);
}

/// Lifecycle shared by every pipeline component.
#[async_trait]
pub trait Component: Send {
    /// Starts the component. Long running work must be spawned, not awaited.
    async fn start(&mut self, host: &dyn Host) -> Result<(), Error>;

    /// Stops the component and releases its resources. The token is cancelled
    /// when the caller stops waiting.
    async fn shutdown(&mut self, ctx: CancellationToken) -> Result<(), Error>;
}
