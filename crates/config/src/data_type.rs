// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Telemetry signal kinds.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of telemetry carried through a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Spans.
    Traces,
    /// Metric points.
    Metrics,
    /// Log records.
    Logs,
}

impl DataType {
    /// Every data type, in declaration order.
    pub const ALL: [DataType; 3] = [DataType::Traces, DataType::Metrics, DataType::Logs];

    /// Returns the lowercase name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::Traces => "traces",
            DataType::Metrics => "metrics",
            DataType::Logs => "logs",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.as_str() == s)
            .ok_or_else(|| Error::UnknownDataType {
                name: s.to_string(),
            })
    }
}
