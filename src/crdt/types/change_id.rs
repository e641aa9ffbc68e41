//! Causal identity of a single change.
//!
//! This module contains the ChangeId struct, which combines a per-actor
//! sequence number, a Lamport clock, the owning actor and an optional
//! server-assigned sequence. ChangeId values are never mutated: every
//! transition builds a fresh value from the receiver's fields.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::crdt::types::actor::ActorId;
use crate::crdt::types::record::ChangeIdRecord;
use crate::crdt::types::ticket::TimeTicket;
use crate::error::ValidationError;

/// A Lamport clock value.
pub type Lamport = u64;

/// The identity of a document that has never been edited.
///
/// `{client_seq: 0, lamport: 0, actor: <sentinel>, server_seq: None}`.
pub static INITIAL_CHANGE_ID: LazyLock<ChangeId> = LazyLock::new(|| ChangeId {
    client_seq: 0,
    lamport: 0,
    actor: ActorId::initial(),
    server_seq: None,
});

/// The causal identity of one change.
///
/// # Fields
///
/// - `client_seq` counts changes originated locally by the actor.
/// - `lamport` is the logical clock position of the change.
/// - `actor` is the replica that produced or currently owns the change.
/// - `server_seq` is present only once the server has durably accepted and
///   sequenced the change.
///
/// # Ordering
///
/// Change ids are ordered by lamport, then actor, then client sequence, then
/// server sequence (absent first). Equal lamport values are always resolved
/// by actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ChangeIdRecord", try_from = "ChangeIdRecord")]
pub struct ChangeId {
    client_seq: u32,
    lamport: Lamport,
    actor: ActorId,
    server_seq: Option<u64>,
}

impl ChangeId {
    /// Creates a change id from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyActor`] if `actor` is empty. Sequence
    /// and clock values are unsigned and need no further checks.
    pub fn of(
        client_seq: u32,
        lamport: Lamport,
        actor: impl AsRef<str>,
        server_seq: Option<u64>,
    ) -> Result<Self, ValidationError> {
        let actor = ActorId::new(actor.as_ref())?;

        Ok(ChangeId {
            client_seq,
            lamport,
            actor,
            server_seq,
        })
    }

    /// Returns a copy of [`INITIAL_CHANGE_ID`].
    pub fn initial() -> Self {
        INITIAL_CHANGE_ID.clone()
    }

    /// Identity of the next local change by the same actor.
    ///
    /// The result is not yet acknowledged, so `server_seq` is cleared.
    /// Both counters stop at their type maximum rather than wrapping, so a
    /// change at `u64::MAX` lamport yields a successor with the same lamport.
    #[must_use]
    pub fn next(&self) -> Self {
        ChangeId {
            client_seq: self.client_seq.saturating_add(1),
            lamport: self.lamport.saturating_add(1),
            actor: self.actor.clone(),
            server_seq: None,
        }
    }

    /// Applies the Lamport receive rule for a remote clock value.
    ///
    /// Adopts `remote` when it is ahead, otherwise advances the local clock
    /// by one. The result is a clock position rather than an acknowledged
    /// change, so `server_seq` is cleared.
    ///
    /// <https://en.wikipedia.org/wiki/Lamport_timestamps#Algorithm>
    #[must_use]
    pub fn sync_lamport(&self, remote: Lamport) -> Self {
        let lamport = if remote > self.lamport {
            remote
        } else {
            self.lamport.saturating_add(1)
        };

        ChangeId {
            client_seq: self.client_seq,
            lamport,
            actor: self.actor.clone(),
            server_seq: None,
        }
    }

    /// Mints an ordering token for an element created within this change.
    pub fn create_time_ticket(&self, delimiter: u32) -> TimeTicket {
        TimeTicket::of(self.lamport, delimiter, self.actor.clone())
    }

    /// Rebinds this change to `actor`.
    ///
    /// Unlike [`next`](Self::next) and [`sync_lamport`](Self::sync_lamport),
    /// this keeps `server_seq`: rebinding does not change acknowledgement.
    #[must_use]
    pub fn set_actor(&self, actor: ActorId) -> Self {
        ChangeId {
            client_seq: self.client_seq,
            lamport: self.lamport,
            actor,
            server_seq: self.server_seq,
        }
    }

    /// Gets the number of changes this actor has originated locally.
    pub fn client_seq(&self) -> u32 {
        self.client_seq
    }

    /// Gets the lamport clock value.
    pub fn lamport(&self) -> Lamport {
        self.lamport
    }

    /// Decimal form of the lamport clock for transmission.
    pub fn lamport_as_string(&self) -> String {
        self.lamport.to_string()
    }

    /// Gets the server sequence, if the change has been acknowledged.
    pub fn server_seq(&self) -> Option<u64> {
        self.server_seq
    }

    /// Decimal form of the server sequence, or an empty string when the
    /// change has not been acknowledged.
    pub fn server_seq_as_string(&self) -> String {
        self.server_seq.map(|seq| seq.to_string()).unwrap_or_default()
    }

    /// Returns true once the server has sequenced this change.
    pub fn is_acknowledged(&self) -> bool {
        self.server_seq.is_some()
    }

    /// Gets the actor that owns this change.
    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Compact form: `lamport:<last two actor chars>:client_seq`.
    pub fn to_test_string(&self) -> String {
        format!(
            "{}:{}:{}",
            self.lamport,
            self.actor.suffix(2),
            self.client_seq
        )
    }
}

impl Default for ChangeId {
    fn default() -> Self {
        ChangeId::initial()
    }
}

impl fmt::Display for ChangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_test_string())
    }
}

impl PartialOrd for ChangeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChangeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lamport
            .cmp(&other.lamport)
            .then_with(|| self.actor.cmp(&other.actor))
            .then_with(|| self.client_seq.cmp(&other.client_seq))
            .then_with(|| self.server_seq.cmp(&other.server_seq))
    }
}
