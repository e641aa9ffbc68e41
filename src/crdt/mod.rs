//! Causal identity for changes in a collaborative document.
//!
//! This module contains the change identifier, the ordering tokens derived
//! from it, and a holder for a session's current identity.

pub mod types;

pub use types::{
    ActorId, ChangeClock, ChangeId, ChangeIdRecord, INITIAL_ACTOR_ID, INITIAL_CHANGE_ID,
    INITIAL_DELIMITER, Lamport, TimeTicket,
};
