// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors shared by components and their factories.

use otelcol_config::{ComponentId, Type};

/// Errors produced while building or running components.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The factory was not given a constructor for the requested signal kind.
    ///
    /// Every factory returns this same variant for every unsupported kind, so
    /// callers match on it rather than on the message.
    #[error("telemetry type is not supported")]
    DataTypeIsNotSupported,

    /// A receiver constructor rejected its inputs.
    #[error("failed to create receiver `{receiver}`: {error}")]
    ReceiverCreation {
        /// The receiver being built.
        receiver: ComponentId,
        /// The error message.
        error: String,
    },

    /// Two factories were registered under the same configuration type.
    #[error("duplicate receiver factory `{receiver_type}`")]
    DuplicateReceiverFactory {
        /// The repeated type.
        receiver_type: Type,
    },

    /// A component failed to start.
    #[error("component `{component}` failed to start: {error}")]
    Start {
        /// The failing component.
        component: ComponentId,
        /// The error message.
        error: String,
    },

    /// A configuration error.
    #[error(transparent)]
    Config(#[from] otelcol_config::Error),

    /// A downstream consumer error.
    #[error(transparent)]
    Consumer(#[from] otelcol_consumer::Error),
}

impl Error {
    /// Returns true for [`Error::DataTypeIsNotSupported`].
    #[must_use]
    pub const fn is_data_type_not_supported(&self) -> bool {
        matches!(self, Error::DataTypeIsNotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_recognized_by_variant() {
        assert!(Error::DataTypeIsNotSupported.is_data_type_not_supported());
        assert_eq!(
            Error::DataTypeIsNotSupported.to_string(),
            "telemetry type is not supported"
        );

        let other = Error::ReceiverCreation {
            receiver: ComponentId::new("otlp"),
            error: "telemetry type is not supported".to_string(),
        };
        assert!(!other.is_data_type_not_supported());
    }

    #[test]
    fn wraps_lower_level_errors() {
        let err: Error = otelcol_config::Error::InvalidUserConfig {
            error: "missing endpoint".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid user config: missing endpoint");

        let err: Error = otelcol_consumer::Error::Transient {
            error: "queue full".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Consumer(e) if !e.is_permanent()));
    }
}
