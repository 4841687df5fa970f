// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Component type and id parsing.
//!
//! A component is referenced in user configuration by a key of the form
//! `<type>` or `<type>/<name>`. The type selects the factory, the optional name
//! distinguishes several instances built by the same factory.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

const TYPE_AND_NAME_SEPARATOR: char = '/';

/// Name of a kind of component configuration, e.g. `otlp` or `syslog_cef`.
///
/// The type is opaque: it is neither validated nor normalized here. Uniqueness
/// is checked by whichever registry stores factories keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(Cow<'static, str>);

impl Type {
    /// Creates a type from any string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Creates a type from a static string, usable in `const` items.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the type is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Type {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Type {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Type {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for Type {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// Identifier of a configured component instance: `<type>` or `<type>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId {
    ty: Type,
    name: Option<String>,
}

impl ComponentId {
    /// Creates an id with only a type, e.g. `otlp`.
    #[must_use]
    pub fn new(ty: impl Into<Type>) -> Self {
        Self {
            ty: ty.into(),
            name: None,
        }
    }

    /// Creates an id with a type and an instance name, e.g. `otlp/internal`.
    #[must_use]
    pub fn with_name(ty: impl Into<Type>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: Some(name.into()),
        }
    }

    /// Returns the type segment.
    #[must_use]
    pub fn component_type(&self) -> &Type {
        &self.ty
    }

    /// Returns the name segment, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parses an id from its textual form.
    ///
    /// Surrounding whitespace is trimmed from each segment. Everything after
    /// the first `/` is the name, so the name may itself contain `/`.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let raw = raw.trim();
        let (ty, name) = match raw.split_once(TYPE_AND_NAME_SEPARATOR) {
            Some((ty, name)) => (ty.trim(), Some(name.trim())),
            None => (raw, None),
        };

        if ty.is_empty() {
            return Err(invalid_component_id(raw, "the type part must be specified"));
        }

        match name {
            Some("") => Err(invalid_component_id(
                raw,
                "the name part must be specified after `/` in a `type/name` key",
            )),
            Some(name) => Ok(Self::with_name(ty.to_string(), name)),
            None => Ok(Self::new(ty.to_string())),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}{TYPE_AND_NAME_SEPARATOR}{name}", self.ty),
            None => f.write_str(self.ty.as_str()),
        }
    }
}

impl FromStr for ComponentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ComponentId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ComponentId> for String {
    fn from(value: ComponentId) -> Self {
        value.to_string()
    }
}

fn invalid_component_id(raw: &str, details: &str) -> Error {
    Error::InvalidComponentId {
        id: raw.to_string(),
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_only() {
        let id = ComponentId::parse("otlp").unwrap();
        assert_eq!(id.component_type().as_str(), "otlp");
        assert_eq!(id.name(), None);
        assert_eq!(id.to_string(), "otlp");
    }

    #[test]
    fn parses_type_and_name() {
        let id: ComponentId = " otlp / internal ".parse().unwrap();
        assert_eq!(id.component_type().as_str(), "otlp");
        assert_eq!(id.name(), Some("internal"));
        assert_eq!(id.to_string(), "otlp/internal");

        // Only the first separator splits the key.
        let id = ComponentId::parse("filelog/a/b").unwrap();
        assert_eq!(id.component_type().as_str(), "filelog");
        assert_eq!(id.name(), Some("a/b"));
    }

    #[test]
    fn rejects_missing_segments() {
        assert!(matches!(
            ComponentId::parse(""),
            Err(Error::InvalidComponentId { .. })
        ));
        assert!(ComponentId::parse("   ").is_err());
        assert!(ComponentId::parse("/name").is_err());
        assert!(ComponentId::parse("otlp/").is_err());
        assert!(ComponentId::parse("otlp/  ").is_err());
    }

    #[test]
    fn serde_uses_textual_form() {
        let id = ComponentId::with_name("otlp", "2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"otlp/2\"");

        let back: ComponentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ComponentId>("\"/2\"").is_err());
    }

    #[test]
    fn type_is_opaque() {
        let empty = Type::new("");
        assert!(empty.is_empty());

        const OTLP: Type = Type::from_static("otlp");
        assert_eq!(OTLP, Type::from("otlp"));
        assert_eq!(OTLP, Type::new(String::from("otlp")));
        assert_eq!(serde_json::to_string(&OTLP).unwrap(), "\"otlp\"");
    }
}
