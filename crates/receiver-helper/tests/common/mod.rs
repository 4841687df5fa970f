// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Test receiver shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use otelcol_component::{
    Component, Error, Host, LogsReceiver, MetricsReceiver, Receiver, ReceiverCreateSettings,
    TracesReceiver,
};
use otelcol_config::{ComponentId, ReceiverConfig, ReceiverSettings};
use otelcol_config::Error as ConfigError;
use otelcol_consumer::{self as consumer, LogsPayload, MetricsPayload, TracesPayload};
use std::any::Any;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Configuration type understood by [`EchoReceiver`].
pub const ECHO_TYPE: &str = "echo";

/// Configuration of the echo receiver.
#[derive(Debug, Clone)]
pub struct EchoConfig {
    pub settings: ReceiverSettings,
    /// Bytes sent downstream once on start.
    pub greeting: Vec<u8>,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            settings: ReceiverSettings::new(ECHO_TYPE),
            greeting: b"hello".to_vec(),
        }
    }
}

impl ReceiverConfig for EchoConfig {
    fn id(&self) -> &ComponentId {
        self.settings.id()
    }

    fn set_id(&mut self, id: ComponentId) {
        self.settings.set_id(id);
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.greeting.is_empty() {
            return Err(ConfigError::InvalidUserConfig {
                error: "greeting must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn default_echo_config() -> Box<dyn ReceiverConfig> {
    Box::new(EchoConfig::default())
}

/// Downstream consumer of an [`EchoReceiver`].
pub enum Next {
    Traces(Arc<dyn consumer::Traces>),
    Metrics(Arc<dyn consumer::Metrics>),
    Logs(Arc<dyn consumer::Logs>),
}

/// Receiver that forwards its configured greeting once when started.
pub struct EchoReceiver {
    id: ComponentId,
    ctx: CancellationToken,
    settings: ReceiverCreateSettings,
    greeting: Vec<u8>,
    next: Next,
}

impl EchoReceiver {
    fn build(
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Next,
    ) -> Result<Self, Error> {
        let cfg = cfg
            .downcast_ref::<EchoConfig>()
            .ok_or_else(|| Error::ReceiverCreation {
                receiver: cfg.id().clone(),
                error: "expected an echo receiver config".to_string(),
            })?;
        cfg.validate()?;

        Ok(Self {
            id: cfg.id().clone(),
            ctx,
            settings,
            greeting: cfg.greeting.clone(),
            next,
        })
    }
}

#[async_trait]
impl Component for EchoReceiver {
    async fn start(&mut self, _host: &dyn Host) -> Result<(), Error> {
        if self.ctx.is_cancelled() {
            return Err(Error::Start {
                component: self.id.clone(),
                error: "cancelled before start".to_string(),
            });
        }

        tracing::debug!(
            parent: &self.settings.span,
            receiver = %self.id,
            version = %self.settings.build_info.version,
            "echo receiver started"
        );

        let greeting = self.greeting.clone();
        match &self.next {
            Next::Traces(next) => next.consume_traces(TracesPayload::new(greeting)).await?,
            Next::Metrics(next) => next.consume_metrics(MetricsPayload::new(greeting)).await?,
            Next::Logs(next) => next.consume_logs(LogsPayload::new(greeting)).await?,
        }
        Ok(())
    }

    async fn shutdown(&mut self, _ctx: CancellationToken) -> Result<(), Error> {
        self.ctx.cancel();
        Ok(())
    }
}

impl Receiver for EchoReceiver {}
impl TracesReceiver for EchoReceiver {}
impl MetricsReceiver for EchoReceiver {}
impl LogsReceiver for EchoReceiver {}

pub fn create_echo_traces(
    ctx: CancellationToken,
    settings: ReceiverCreateSettings,
    cfg: &dyn ReceiverConfig,
    next: Arc<dyn consumer::Traces>,
) -> Result<Box<dyn TracesReceiver>, Error> {
    Ok(Box::new(EchoReceiver::build(
        ctx,
        settings,
        cfg,
        Next::Traces(next),
    )?))
}

pub fn create_echo_metrics(
    ctx: CancellationToken,
    settings: ReceiverCreateSettings,
    cfg: &dyn ReceiverConfig,
    next: Arc<dyn consumer::Metrics>,
) -> Result<Box<dyn MetricsReceiver>, Error> {
    Ok(Box::new(EchoReceiver::build(
        ctx,
        settings,
        cfg,
        Next::Metrics(next),
    )?))
}

pub fn create_echo_logs(
    ctx: CancellationToken,
    settings: ReceiverCreateSettings,
    cfg: &dyn ReceiverConfig,
    next: Arc<dyn consumer::Logs>,
) -> Result<Box<dyn LogsReceiver>, Error> {
    Ok(Box::new(EchoReceiver::build(
        ctx,
        settings,
        cfg,
        Next::Logs(next),
    )?))
}
