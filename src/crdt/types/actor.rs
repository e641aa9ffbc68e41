//! Actor identifier type and related functionality.
//!
//! This module contains the definition of ActorId, which identifies the
//! replica that produced or currently owns a change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Text of the sentinel actor used before a real identity is assigned.
pub const INITIAL_ACTOR_ID: &str = "000000000000000000000000";

/// An opaque identifier for a replica (collaborator) in the distributed system.
///
/// The format is owned by whoever allocates actors; this type only carries
/// the text and guarantees it is non-empty. Actors are ordered
/// lexicographically, which is the tie-break used when two changes share a
/// lamport value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorId(String);

impl ActorId {
    /// Creates an actor id from any string-like input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyActor`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyActor);
        }
        Ok(ActorId(id))
    }

    /// The sentinel actor.
    pub fn initial() -> Self {
        ActorId(INITIAL_ACTOR_ID.to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the sentinel actor.
    pub fn is_initial(&self) -> bool {
        self.0 == INITIAL_ACTOR_ID
    }

    /// Returns the last `n` characters, or the whole id when it is shorter.
    pub fn suffix(&self, n: usize) -> &str {
        if n == 0 {
            return "";
        }
        match self.0.char_indices().rev().nth(n - 1) {
            Some((start, _)) => &self.0[start..],
            None => &self.0,
        }
    }
}

impl Default for ActorId {
    fn default() -> Self {
        ActorId::initial()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ActorId {
    type Error = ValidationError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        ActorId::new(id)
    }
}

impl TryFrom<String> for ActorId {
    type Error = ValidationError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        ActorId::new(id)
    }
}

impl From<ActorId> for String {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: &str) -> ActorId {
        ActorId::new(id).unwrap()
    }

    #[test]
    fn test_initial_actor() {
        let initial = ActorId::initial();
        assert!(initial.is_initial());
        assert_eq!(initial.as_str().len(), 24);
        assert_eq!(ActorId::default(), initial);
    }

    #[test]
    fn test_empty_actor_rejected() {
        assert_eq!(ActorId::new(""), Err(ValidationError::EmptyActor));
        assert_eq!(ActorId::try_from(String::new()), Err(ValidationError::EmptyActor));
    }

    #[test]
    fn test_suffix() {
        let id = actor("65a1f0c2b3");
        assert_eq!(id.suffix(2), "b3");
        assert_eq!(id.suffix(0), "");
        assert_eq!(id.suffix(10), "65a1f0c2b3");
        assert_eq!(id.suffix(11), "65a1f0c2b3");
        assert_eq!(actor("A").suffix(2), "A");
        assert_eq!(actor("añb").suffix(2), "ñb");
    }

    #[test]
    fn test_actor_ordering() {
        assert!(actor("A") < actor("B"));
        assert!(actor("A") < actor("AA"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&actor("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
        assert_eq!(serde_json::from_str::<ActorId>(&json).unwrap(), actor("abc"));
    }

    #[test]
    fn test_empty_string_does_not_deserialize() {
        assert!(serde_json::from_str::<ActorId>("\"\"").is_err());
    }
}
