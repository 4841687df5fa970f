// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Receiver factory assembled from optional per-signal constructors.

use otelcol_component::{
    Error, LogsReceiver, MetricsReceiver, ReceiverCreateSettings, ReceiverFactory, TracesReceiver,
};
use otelcol_config::{DataType, ReceiverConfig, Type};
use otelcol_consumer as consumer;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Produces the default configuration of a receiver type.
pub type CreateDefaultConfig = Box<dyn Fn() -> Box<dyn ReceiverConfig> + Send + Sync>;

/// Builds a traces receiver, see [`ReceiverFactory::create_traces_receiver`].
pub type CreateTracesReceiver = Box<
    dyn Fn(
            CancellationToken,
            ReceiverCreateSettings,
            &dyn ReceiverConfig,
            Arc<dyn consumer::Traces>,
        ) -> Result<Box<dyn TracesReceiver>, Error>
        + Send
        + Sync,
>;

/// Builds a metrics receiver, see [`ReceiverFactory::create_metrics_receiver`].
pub type CreateMetricsReceiver = Box<
    dyn Fn(
            CancellationToken,
            ReceiverCreateSettings,
            &dyn ReceiverConfig,
            Arc<dyn consumer::Metrics>,
        ) -> Result<Box<dyn MetricsReceiver>, Error>
        + Send
        + Sync,
>;

/// Builds a logs receiver, see [`ReceiverFactory::create_logs_receiver`].
pub type CreateLogsReceiver = Box<
    dyn Fn(
            CancellationToken,
            ReceiverCreateSettings,
            &dyn ReceiverConfig,
            Arc<dyn consumer::Logs>,
        ) -> Result<Box<dyn LogsReceiver>, Error>
        + Send
        + Sync,
>;

/// Installs the constructor for one signal kind on a [`FactoryBuilder`].
pub enum FactoryOption {
    /// Constructor for traces receivers.
    Traces(CreateTracesReceiver),
    /// Constructor for metrics receivers.
    Metrics(CreateMetricsReceiver),
    /// Constructor for logs receivers.
    Logs(CreateLogsReceiver),
}

impl FactoryOption {
    /// Returns the signal kind this option enables.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            FactoryOption::Traces(_) => DataType::Traces,
            FactoryOption::Metrics(_) => DataType::Metrics,
            FactoryOption::Logs(_) => DataType::Logs,
        }
    }
}

impl fmt::Debug for FactoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FactoryOption")
            .field(&self.data_type())
            .finish()
    }
}

/// Enables traces receivers built by `create`.
pub fn with_traces<F>(create: F) -> FactoryOption
where
    F: Fn(
            CancellationToken,
            ReceiverCreateSettings,
            &dyn ReceiverConfig,
            Arc<dyn consumer::Traces>,
        ) -> Result<Box<dyn TracesReceiver>, Error>
        + Send
        + Sync
        + 'static,
{
    FactoryOption::Traces(Box::new(create))
}

/// Enables metrics receivers built by `create`.
pub fn with_metrics<F>(create: F) -> FactoryOption
where
    F: Fn(
            CancellationToken,
            ReceiverCreateSettings,
            &dyn ReceiverConfig,
            Arc<dyn consumer::Metrics>,
        ) -> Result<Box<dyn MetricsReceiver>, Error>
        + Send
        + Sync
        + 'static,
{
    FactoryOption::Metrics(Box::new(create))
}

/// Enables logs receivers built by `create`.
pub fn with_logs<F>(create: F) -> FactoryOption
where
    F: Fn(
            CancellationToken,
            ReceiverCreateSettings,
            &dyn ReceiverConfig,
            Arc<dyn consumer::Logs>,
        ) -> Result<Box<dyn LogsReceiver>, Error>
        + Send
        + Sync
        + 'static,
{
    FactoryOption::Logs(Box::new(create))
}

/// Creates a factory for `config_type`, applying `options` in order.
///
/// When several options target the same signal kind the last one wins.
/// Nothing is validated: an empty type is accepted as given.
pub fn new_factory<F>(
    config_type: impl Into<Type>,
    create_default_config: F,
    options: impl IntoIterator<Item = FactoryOption>,
) -> Factory
where
    F: Fn() -> Box<dyn ReceiverConfig> + Send + Sync + 'static,
{
    options
        .into_iter()
        .fold(
            Factory::builder(config_type, create_default_config),
            FactoryBuilder::option,
        )
        .build()
}

/// Receiver factory supporting the signal kinds it was given constructors for.
///
/// Immutable once built, so it can be shared between threads behind an
/// [`Arc`].
pub struct Factory {
    config_type: Type,
    create_default_config: CreateDefaultConfig,
    create_traces_receiver: Option<CreateTracesReceiver>,
    create_metrics_receiver: Option<CreateMetricsReceiver>,
    create_logs_receiver: Option<CreateLogsReceiver>,
}

impl Factory {
    /// Starts a factory for `config_type` with no signal support.
    pub fn builder<F>(config_type: impl Into<Type>, create_default_config: F) -> FactoryBuilder
    where
        F: Fn() -> Box<dyn ReceiverConfig> + Send + Sync + 'static,
    {
        FactoryBuilder {
            config_type: config_type.into(),
            create_default_config: Box::new(create_default_config),
            create_traces_receiver: None,
            create_metrics_receiver: None,
            create_logs_receiver: None,
        }
    }

    /// Returns the signal kinds this factory can build receivers for.
    #[must_use]
    pub fn supported_data_types(&self) -> Vec<DataType> {
        DataType::ALL
            .into_iter()
            .filter(|data_type| self.supports(*data_type))
            .collect()
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("config_type", &self.config_type)
            .field("data_types", &self.supported_data_types())
            .finish_non_exhaustive()
    }
}

impl ReceiverFactory for Factory {
    fn config_type(&self) -> &Type {
        &self.config_type
    }

    fn create_default_config(&self) -> Box<dyn ReceiverConfig> {
        (self.create_default_config)()
    }

    fn supports(&self, data_type: DataType) -> bool {
        match data_type {
            DataType::Traces => self.create_traces_receiver.is_some(),
            DataType::Metrics => self.create_metrics_receiver.is_some(),
            DataType::Logs => self.create_logs_receiver.is_some(),
        }
    }

    fn create_traces_receiver(
        &self,
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Arc<dyn consumer::Traces>,
    ) -> Result<Box<dyn TracesReceiver>, Error> {
        match &self.create_traces_receiver {
            Some(create) => create(ctx, settings, cfg, next),
            None => Err(Error::DataTypeIsNotSupported),
        }
    }

    fn create_metrics_receiver(
        &self,
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Arc<dyn consumer::Metrics>,
    ) -> Result<Box<dyn MetricsReceiver>, Error> {
        match &self.create_metrics_receiver {
            Some(create) => create(ctx, settings, cfg, next),
            None => Err(Error::DataTypeIsNotSupported),
        }
    }

    fn create_logs_receiver(
        &self,
        ctx: CancellationToken,
        settings: ReceiverCreateSettings,
        cfg: &dyn ReceiverConfig,
        next: Arc<dyn consumer::Logs>,
    ) -> Result<Box<dyn LogsReceiver>, Error> {
        match &self.create_logs_receiver {
            Some(create) => create(ctx, settings, cfg, next),
            None => Err(Error::DataTypeIsNotSupported),
        }
    }
}

/// In-progress [`Factory`]. Consumed by [`FactoryBuilder::build`].
#[must_use = "a factory builder does nothing until `build` is called"]
pub struct FactoryBuilder {
    config_type: Type,
    create_default_config: CreateDefaultConfig,
    create_traces_receiver: Option<CreateTracesReceiver>,
    create_metrics_receiver: Option<CreateMetricsReceiver>,
    create_logs_receiver: Option<CreateLogsReceiver>,
}

impl FactoryBuilder {
    /// Applies one option, replacing any constructor already set for the
    /// same signal kind.
    pub fn option(mut self, option: FactoryOption) -> Self {
        match option {
            FactoryOption::Traces(create) => self.create_traces_receiver = Some(create),
            FactoryOption::Metrics(create) => self.create_metrics_receiver = Some(create),
            FactoryOption::Logs(create) => self.create_logs_receiver = Some(create),
        }
        self
    }

    /// Enables traces receivers built by `create`.
    pub fn with_traces<F>(self, create: F) -> Self
    where
        F: Fn(
                CancellationToken,
                ReceiverCreateSettings,
                &dyn ReceiverConfig,
                Arc<dyn consumer::Traces>,
            ) -> Result<Box<dyn TracesReceiver>, Error>
            + Send
            + Sync
            + 'static,
    {
        self.option(with_traces(create))
    }

    /// Enables metrics receivers built by `create`.
    pub fn with_metrics<F>(self, create: F) -> Self
    where
        F: Fn(
                CancellationToken,
                ReceiverCreateSettings,
                &dyn ReceiverConfig,
                Arc<dyn consumer::Metrics>,
            ) -> Result<Box<dyn MetricsReceiver>, Error>
            + Send
            + Sync
            + 'static,
    {
        self.option(with_metrics(create))
    }

    /// Enables logs receivers built by `create`.
    pub fn with_logs<F>(self, create: F) -> Self
    where
        F: Fn(
                CancellationToken,
                ReceiverCreateSettings,
                &dyn ReceiverConfig,
                Arc<dyn consumer::Logs>,
            ) -> Result<Box<dyn LogsReceiver>, Error>
            + Send
            + Sync
            + 'static,
    {
        self.option(with_logs(create))
    }

    /// Freezes the builder into a [`Factory`].
    #[must_use]
    pub fn build(self) -> Factory {
        Factory {
            config_type: self.config_type,
            create_default_config: self.create_default_config,
            create_traces_receiver: self.create_traces_receiver,
            create_metrics_receiver: self.create_metrics_receiver,
            create_logs_receiver: self.create_logs_receiver,
        }
    }
}

impl fmt::Debug for FactoryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryBuilder")
            .field("config_type", &self.config_type)
            .finish_non_exhaustive()
    }
}
