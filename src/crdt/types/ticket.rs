//! Time ticket implementation for ordering elements created within a change.
//!
//! This module contains the TimeTicket struct, the fine-grained ordering token
//! minted from a change's lamport value, a caller-supplied delimiter and the
//! change's actor.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crdt::types::actor::ActorId;
use crate::crdt::types::change_id::Lamport;

/// Delimiter of the first ticket minted within a change.
pub const INITIAL_DELIMITER: u32 = 0;

/// An ordering token for an element created within a single change.
///
/// Callers minting several tickets from one change must pass strictly
/// increasing delimiters; the ticket only composes the tuple.
///
/// # Ordering
///
/// Tickets are ordered first by lamport, then by actor, then by delimiter.
/// Two tickets from different changes with equal lamport values are
/// therefore ordered by their actors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeTicket {
    lamport: Lamport,
    delimiter: u32,
    actor: ActorId,
}

impl TimeTicket {
    pub fn of(lamport: Lamport, delimiter: u32, actor: ActorId) -> Self {
        TimeTicket {
            lamport,
            delimiter,
            actor,
        }
    }

    pub fn lamport(&self) -> Lamport {
        self.lamport
    }

    pub fn lamport_as_string(&self) -> String {
        self.lamport.to_string()
    }

    pub fn delimiter(&self) -> u32 {
        self.delimiter
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Full identity string: `lamport:actor:delimiter`.
    pub fn to_id_string(&self) -> String {
        format!("{}:{}:{}", self.lamport, self.actor, self.delimiter)
    }

    /// Compact form with only the last two characters of the actor.
    pub fn to_test_string(&self) -> String {
        format!(
            "{}:{}:{}",
            self.lamport,
            self.actor.suffix(2),
            self.delimiter
        )
    }
}

impl fmt::Display for TimeTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id_string())
    }
}

impl PartialOrd for TimeTicket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeTicket {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.lamport.cmp(&other.lamport) {
            Ordering::Equal => match self.actor.cmp(&other.actor) {
                Ordering::Equal => self.delimiter.cmp(&other.delimiter),
                other => other,
            },
            other => other,
        }
    }
}
