//! # Change ID - causal identity for collaborative edits
//!
//! Every edit made by a client carries a [`ChangeId`]: a Lamport clock, a
//! per-actor sequence number, the actor that made it, and (once the server
//! has accepted it) a server-assigned global sequence. Replicas use these to
//! order edits, detect duplicates, and mint [`TimeTicket`]s for elements
//! created inside an edit.
//!
//! ## Features
//!
//! - **Immutable**: every transition returns a new value
//! - **Total order**: equal lamport values are resolved by actor
//! - **Precision-safe wire form**: lamport and server sequence travel as decimal strings
//! - **Shared sessions**: [`ChangeClock`] swaps identities under a lock for concurrent callers
//!
//! ## Example
//!
//! ```rust
//! use change_id::{ActorId, ChangeId};
//!
//! let id = ChangeId::initial().set_actor(ActorId::new("actor-1")?);
//! let next = id.next().sync_lamport(20);
//! assert_eq!(next.lamport(), 20);
//! assert_eq!(next.client_seq(), 1);
//!
//! let ticket = next.create_time_ticket(0);
//! assert_eq!(ticket.to_id_string(), "20:actor-1:0");
//! # Ok::<(), change_id::ValidationError>(())
//! ```

pub mod crdt;
pub mod error;

pub use crdt::{
    ActorId, ChangeClock, ChangeId, ChangeIdRecord, INITIAL_ACTOR_ID, INITIAL_CHANGE_ID,
    INITIAL_DELIMITER, Lamport, TimeTicket,
};
pub use error::ValidationError;
