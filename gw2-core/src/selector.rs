//! Typed addressing of single resources, id lists, and full enumerations.

use serde_json::Value;
use std::fmt;

/// A resource identifier as the remote API uses them: most endpoints take
/// integers, a few (pvp games, files, quaggans, guild permissions) take
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceId {
    Int(i64),
    Str(String),
}

impl ResourceId {
    /// Extracts an id from a JSON value, accepting either a bare number or
    /// a bare string.
    pub fn from_value(value: &Value) -> Option<Self> {
        if let Some(n) = value.as_i64() {
            return Some(ResourceId::Int(n));
        }
        value.as_str().map(|s| ResourceId::Str(s.to_string()))
    }

    pub fn to_value(&self) -> Value {
        match self {
            ResourceId::Int(n) => Value::from(*n),
            ResourceId::Str(s) => Value::from(s.clone()),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(n) => write!(f, "{n}"),
            ResourceId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Int(id)
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        ResourceId::Int(id as i64)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Str(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Str(id)
    }
}

/// Which resources a call addresses.
///
/// Replaces runtime inspection of an absent/scalar/array argument with an
/// explicit sum type decided at the call site:
///
/// - [`IdSelector::All`] hits the bare endpoint and yields the full id
///   enumeration,
/// - [`IdSelector::One`] addresses `endpoint/{id}`,
/// - [`IdSelector::Many`] becomes a sorted, comma-joined `ids` parameter.
#[derive(Debug, Clone)]
pub enum IdSelector {
    All,
    One(ResourceId),
    Many(Vec<ResourceId>),
}

impl IdSelector {
    pub fn one<I: Into<ResourceId>>(id: I) -> Self {
        IdSelector::One(id.into())
    }

    pub fn many<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ResourceId>,
    {
        IdSelector::Many(ids.into_iter().map(Into::into).collect())
    }
}
