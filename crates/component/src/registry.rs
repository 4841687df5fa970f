// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Registry of receiver factories keyed by configuration type.
//!
//! Factories are either collected explicitly with [`ReceiverFactories::new`]
//! or registered at link time into [`RECEIVER_FACTORIES`]:
//!
//! ```ignore
//! #[allow(unsafe_code)]
//! #[distributed_slice(RECEIVER_FACTORIES)]
//! static OTLP_RECEIVER: fn() -> Arc<dyn ReceiverFactory> = otlp::factory;
//! ```

use crate::error::Error;
use crate::receiver::ReceiverFactory;
use linkme::distributed_slice;
use otelcol_config::Type;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

/// Receiver factories registered at link time.
#[allow(unsafe_code)]
#[distributed_slice]
pub static RECEIVER_FACTORIES: [fn() -> Arc<dyn ReceiverFactory>];

/// Receiver factories indexed by the configuration type they understand.
#[derive(Clone, Default)]
pub struct ReceiverFactories {
    by_type: BTreeMap<Type, Arc<dyn ReceiverFactory>>,
}

impl ReceiverFactories {
    /// Indexes `factories` by type.
    ///
    /// Fails with [`Error::DuplicateReceiverFactory`] if two factories report
    /// the same type.
    pub fn new(
        factories: impl IntoIterator<Item = Arc<dyn ReceiverFactory>>,
    ) -> Result<Self, Error> {
        let mut by_type = BTreeMap::new();
        for factory in factories {
            match by_type.entry(factory.config_type().clone()) {
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateReceiverFactory {
                        receiver_type: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    tracing::debug!(
                        receiver_type = %entry.key(),
                        "registered receiver factory"
                    );
                    let _ = entry.insert(factory);
                }
            }
        }
        Ok(Self { by_type })
    }

    /// Indexes every factory in [`RECEIVER_FACTORIES`].
    pub fn registered() -> Result<Self, Error> {
        Self::new(RECEIVER_FACTORIES.iter().map(|create| create()))
    }

    /// Returns the factory for `receiver_type`.
    #[must_use]
    pub fn get(&self, receiver_type: &str) -> Option<&Arc<dyn ReceiverFactory>> {
        self.by_type.get(receiver_type)
    }

    /// Returns true if a factory is registered for `receiver_type`.
    #[must_use]
    pub fn contains(&self, receiver_type: &str) -> bool {
        self.by_type.contains_key(receiver_type)
    }

    /// Returns the registered types in sorted order.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.by_type.keys()
    }

    /// Returns every factory, sorted by type.
    pub fn iter(&self) -> impl Iterator<Item = (&Type, &Arc<dyn ReceiverFactory>)> {
        self.by_type.iter()
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Returns true if no factory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl fmt::Debug for ReceiverFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.by_type.keys()).finish()
    }
}
