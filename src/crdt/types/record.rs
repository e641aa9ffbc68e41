//! Wire representation of a change identifier.
//!
//! Lamport and server sequence values travel as decimal strings so that
//! hosts without exact 64-bit integers do not lose precision. An empty
//! `serverSeq` (or a missing field) means the change is not acknowledged.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::crdt::types::change_id::{ChangeId, Lamport};
use crate::error::ValidationError;

/// A change identifier as exchanged with persistence and sync collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeIdRecord {
    pub client_seq: i64,
    pub lamport: String,
    #[serde(rename = "actorId")]
    pub actor: String,
    #[serde(default)]
    pub server_seq: String,
}

fn parse_decimal(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl ChangeIdRecord {
    fn validate(self) -> Result<ChangeId, ValidationError> {
        if self.client_seq < 0 {
            return Err(ValidationError::NegativeClientSeq(self.client_seq));
        }
        let client_seq = u32::try_from(self.client_seq)
            .map_err(|_| ValidationError::ClientSeqOutOfRange(self.client_seq))?;

        let lamport: Lamport = parse_decimal(&self.lamport)
            .ok_or_else(|| ValidationError::InvalidLamport(self.lamport.clone()))?;

        let server_seq = if self.server_seq.is_empty() {
            None
        } else {
            Some(
                parse_decimal(&self.server_seq)
                    .ok_or_else(|| ValidationError::InvalidServerSeq(self.server_seq.clone()))?,
            )
        };

        ChangeId::of(client_seq, lamport, self.actor, server_seq)
    }
}

impl TryFrom<ChangeIdRecord> for ChangeId {
    type Error = ValidationError;

    fn try_from(record: ChangeIdRecord) -> Result<Self, Self::Error> {
        record.validate().inspect_err(|err| {
            warn!(error = %err, "rejected change id record");
        })
    }
}

impl From<ChangeId> for ChangeIdRecord {
    fn from(id: ChangeId) -> Self {
        ChangeIdRecord {
            client_seq: i64::from(id.client_seq()),
            lamport: id.lamport_as_string(),
            server_seq: id.server_seq_as_string(),
            actor: id.actor().as_str().to_string(),
        }
    }
}

impl From<&ChangeId> for ChangeIdRecord {
    fn from(id: &ChangeId) -> Self {
        ChangeIdRecord::from(id.clone())
    }
}
