//! Thread-safe holder for a session's current change identity.
//!
//! This module contains the ChangeClock struct. It never mutates a ChangeId;
//! it swaps in the value produced by a pure transition while holding the
//! write lock, so concurrent readers see either the old or the new identity.

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::crdt::types::actor::ActorId;
use crate::crdt::types::change_id::{ChangeId, Lamport};
use crate::crdt::types::ticket::TimeTicket;

/// The current change identity of a document session.
#[derive(Debug)]
pub struct ChangeClock {
    current: RwLock<ChangeId>,
}

impl ChangeClock {
    /// Creates a clock seeded with `id`, e.g. one hydrated from the server.
    pub fn new(id: ChangeId) -> Self {
        ChangeClock {
            current: RwLock::new(id),
        }
    }

    /// Returns a snapshot of the current identity.
    pub fn current(&self) -> ChangeId {
        self.current.read().clone()
    }

    /// Advances to the next local change and returns its identity.
    pub fn next(&self) -> ChangeId {
        let mut current = self.current.write();
        let next = current.next();
        trace!(change = %next, "advanced local change");
        *current = next.clone();
        next
    }

    /// Folds a remote lamport value into the clock.
    pub fn sync_lamport(&self, remote: Lamport) -> ChangeId {
        let mut current = self.current.write();
        let synced = current.sync_lamport(remote);
        debug!(
            remote,
            from = current.lamport(),
            to = synced.lamport(),
            "synced lamport clock"
        );
        *current = synced.clone();
        synced
    }

    /// Rebinds the current identity to `actor`.
    pub fn set_actor(&self, actor: ActorId) -> ChangeId {
        let mut current = self.current.write();
        debug!(from = %current.actor(), to = %actor, "rebinding actor");
        let rebound = current.set_actor(actor);
        *current = rebound.clone();
        rebound
    }

    /// Replaces the current identity wholesale and returns the previous one.
    pub fn replace(&self, id: ChangeId) -> ChangeId {
        std::mem::replace(&mut *self.current.write(), id)
    }

    /// Mints a ticket from the current identity.
    pub fn create_time_ticket(&self, delimiter: u32) -> TimeTicket {
        self.current.read().create_time_ticket(delimiter)
    }
}

impl Default for ChangeClock {
    fn default() -> Self {
        ChangeClock::new(ChangeId::initial())
    }
}
