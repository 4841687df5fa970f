// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Receiver configuration contract.

use crate::component_id::{ComponentId, Type};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;

/// Configuration of a receiver instance.
///
/// Factories hand these out as trait objects; receiver builders recover their
/// concrete type with `downcast_ref`.
pub trait ReceiverConfig: Debug + Send + Sync + 'static {
    /// Returns the id of the receiver instance this configuration belongs to.
    fn id(&self) -> &ComponentId;

    /// Sets the id, typically once the loader knows the user's key.
    fn set_id(&mut self, id: ComponentId);

    /// Checks the configuration for semantic errors.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn ReceiverConfig {
    /// Returns the concrete configuration if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: ReceiverConfig>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Settings common to every receiver configuration.
///
/// Concrete configurations embed this record and forward
/// [`ReceiverConfig::id`] and [`ReceiverConfig::set_id`] to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverSettings {
    id: ComponentId,
}

impl ReceiverSettings {
    /// Creates settings whose id is the bare type.
    #[must_use]
    pub fn new(ty: impl Into<Type>) -> Self {
        Self {
            id: ComponentId::new(ty),
        }
    }

    /// Returns the receiver id.
    #[must_use]
    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Replaces the receiver id.
    pub fn set_id(&mut self, id: ComponentId) {
        self.id = id;
    }
}

impl ReceiverConfig for ReceiverSettings {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn set_id(&mut self, id: ComponentId) {
        self.id = id;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
