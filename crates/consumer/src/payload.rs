// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Signal payloads handed to consumers.
//!
//! Each payload wraps the protobuf encoding of the matching OTLP export
//! request. Consumers that need structured access decode it themselves.

use bytes::Bytes;
use otelcol_config::DataType;

macro_rules! payload {
    ($(#[$meta:meta])* $name:ident, $data_type:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name(Bytes);

        impl $name {
            /// Wraps an encoded export request.
            #[must_use]
            pub fn new(bytes: impl Into<Bytes>) -> Self {
                Self(bytes.into())
            }

            /// Returns the encoded request.
            #[must_use]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Consumes the payload and returns the encoded request.
            #[must_use]
            pub fn into_bytes(self) -> Bytes {
                self.0
            }

            /// Returns the encoded size in bytes.
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns true if the encoded request is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Returns the signal kind carried by this payload.
            #[must_use]
            pub const fn data_type(&self) -> DataType {
                $data_type
            }
        }

        impl From<Bytes> for $name {
            fn from(bytes: Bytes) -> Self {
                Self(bytes)
            }
        }
    };
}

payload!(
    /// An encoded `ExportTraceServiceRequest`.
    TracesPayload,
    DataType::Traces
);

payload!(
    /// An encoded `ExportMetricsServiceRequest`.
    MetricsPayload,
    DataType::Metrics
);

payload!(
    /// An encoded `ExportLogsServiceRequest`.
    LogsPayload,
    DataType::Logs
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_report_their_signal() {
        let traces = TracesPayload::new(vec![0x0a, 0x00]);
        assert_eq!(traces.data_type(), DataType::Traces);
        assert_eq!(traces.len(), 2);
        assert_eq!(traces.as_bytes(), &[0x0a, 0x00]);

        assert_eq!(MetricsPayload::default().data_type(), DataType::Metrics);
        assert!(MetricsPayload::default().is_empty());

        let logs = LogsPayload::from(Bytes::from_static(b"\x0a\x02\x0a\x00"));
        assert_eq!(logs.data_type(), DataType::Logs);
        assert_eq!(logs.into_bytes(), Bytes::from_static(b"\x0a\x02\x0a\x00"));
    }
}
