// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by consumers.

/// Why a consumer refused a payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Retrying the same payload will fail again.
    #[error("permanent error: {error}")]
    Permanent {
        /// The error message.
        error: String,
    },

    /// The payload may be accepted if sent again later.
    #[error("transient error: {error}")]
    Transient {
        /// The error message.
        error: String,
    },
}

impl Error {
    /// Returns true if the payload must not be retried.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Error::Permanent { .. })
    }
}
