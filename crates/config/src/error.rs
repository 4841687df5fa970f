// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors for the configuration crate.

/// Errors that can occur while naming or validating a component configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A component id could not be parsed.
    #[error("invalid component id `{id}`: {details}")]
    InvalidComponentId {
        /// The raw id as provided by the user.
        id: String,
        /// What is wrong with it.
        details: String,
    },

    /// A data type name is not one of `traces`, `metrics` or `logs`.
    #[error("unknown data type `{name}`, expected `traces`, `metrics`, or `logs`")]
    UnknownDataType {
        /// The rejected name.
        name: String,
    },

    /// A user configuration is invalid.
    #[error("invalid user config: {error}")]
    InvalidUserConfig {
        /// The error message.
        error: String,
    },
}
