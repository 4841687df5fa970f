// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! No-op components for tests.

use crate::receiver::{LogsReceiver, MetricsReceiver, Receiver, TracesReceiver};
use crate::{Component, Error, Host};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Host that ignores fatal errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopHost;

impl Host for NopHost {
    fn report_fatal_error(&self, _error: Error) {}
}

/// Receiver that does nothing when started or stopped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopReceiver;

#[async_trait]
impl Component for NopReceiver {
    async fn start(&mut self, _host: &dyn Host) -> Result<(), Error> {
        Ok(())
    }

    async fn shutdown(&mut self, _ctx: CancellationToken) -> Result<(), Error> {
        Ok(())
    }
}

impl Receiver for NopReceiver {}
impl TracesReceiver for NopReceiver {}
impl MetricsReceiver for NopReceiver {}
impl LogsReceiver for NopReceiver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn nop_receiver_lifecycle() {
        let mut receiver: Box<dyn TracesReceiver> = Box::new(NopReceiver);
        receiver.start(&NopHost).await.expect("start");
        receiver
            .shutdown(CancellationToken::new())
            .await
            .expect("shutdown");
    }
}
