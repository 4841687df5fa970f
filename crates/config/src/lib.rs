// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Configuration identifiers shared by collector components.
//!
//! This crate defines how a component configuration is named (its [`Type`] and
//! [`ComponentId`]), which telemetry [`DataType`]s exist, and the
//! [`ReceiverConfig`] trait every receiver configuration implements. Decoding
//! concrete configurations from user files is left to the pipeline loader.

pub mod component_id;
pub mod data_type;
pub mod error;
pub mod receiver;

pub use component_id::{ComponentId, Type};
pub use data_type::DataType;
pub use error::Error;
pub use receiver::{ReceiverConfig, ReceiverSettings};
