// SPDX-License-Identifier: MIT

//!
//! The string key types used to identify events, entities, categories, and
//! timelines
//!

use serde::{Deserialize, Serialize};

/// The ID of an event.  Must be unique within its [`crate::Timeline`].
#[rustfmt::skip]
#[derive(derive_more::Display, derive_more::From, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct EventId(String);

/// The key of the entity (e.g. a person or resource) an event belongs to.
/// Each distinct entity gets its own lane.
#[rustfmt::skip]
#[derive(derive_more::Display, derive_more::From, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct EntityKey(String);

/// The key of an event's category (used to look up its colour)
#[rustfmt::skip]
#[derive(derive_more::Display, derive_more::From, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CategoryKey(String);

/// The label shown above a timeline
#[rustfmt::skip]
#[derive(derive_more::Display, derive_more::From, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TimelineLabel(String);

impl EventId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EntityKey {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CategoryKey {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TimelineLabel {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_are_exact() {
        // Keys are compared as given (no trimming or case folding)
        assert_ne!(EntityKey::new("Alice"), EntityKey::new(" Alice"));
        assert_ne!(CategoryKey::new("work"), CategoryKey::new("Work"));
        assert_eq!(EventId::from(String::from("e1")), EventId::new("e1"));
    }

    #[test]
    fn serde_transparent() {
        let key: EntityKey = serde_json::from_str(r#""Room 4""#).unwrap();
        assert_eq!(key.as_str(), "Room 4");
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""Room 4""#);
        assert!(serde_json::from_str::<EventId>("4").is_err());
    }
}
