// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for writing receiver factories.
//!
//! Most receivers only support some of the three signal kinds. [`Factory`]
//! lets a receiver author provide constructors for the kinds they support and
//! answers [`Error::DataTypeIsNotSupported`](otelcol_component::Error::DataTypeIsNotSupported)
//! for the others, while exposing the full
//! [`ReceiverFactory`](otelcol_component::ReceiverFactory) interface to the
//! pipeline builder.
//!
//! ```ignore
//! let factory = Factory::builder("otlp", || Box::new(Config::default()))
//!     .with_traces(create_traces_receiver)
//!     .with_logs(create_logs_receiver)
//!     .build();
//! ```

pub mod factory;

pub use factory::{
    CreateDefaultConfig, CreateLogsReceiver, CreateMetricsReceiver, CreateTracesReceiver,
    Factory, FactoryBuilder, FactoryOption, new_factory, with_logs, with_metrics, with_traces,
};
