//! Type definitions for change identity.
//!
//! This module contains the identifier and causality types, organized into
//! focused submodules.

pub mod actor;
pub mod change_id;
pub mod clock;
pub mod record;
pub mod ticket;

pub use actor::{ActorId, INITIAL_ACTOR_ID};
pub use change_id::{ChangeId, INITIAL_CHANGE_ID, Lamport};
pub use clock::ChangeClock;
pub use record::ChangeIdRecord;
pub use ticket::{INITIAL_DELIMITER, TimeTicket};
