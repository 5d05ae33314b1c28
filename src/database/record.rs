use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::auth::AdminTokenHash;
use crate::types::TournamentId;

/// A stored tournament.
///
/// Deliberately not `Serialize`: the only way out to a client is through
/// [`TournamentSnapshot`], which has no digest field.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentRecord {
    pub id: TournamentId,
    /// Opaque bracket/scoring payload
    pub tournament: Value,
    pub admin_token_hash: AdminTokenHash,
    pub updated_at: DateTime<Utc>,
}

impl TournamentRecord {
    pub fn new(id: TournamentId, tournament: Value, admin_token_hash: AdminTokenHash, now: DateTime<Utc>) -> Self {
        Self {
            id,
            tournament,
            admin_token_hash,
            updated_at: now,
        }
    }

    /// Replace the payload, keeping the digest. `updated_at` never moves
    /// backwards even if the clock does.
    pub fn with_tournament(mut self, tournament: Value, now: DateTime<Utc>) -> Self {
        self.tournament = tournament;
        self.updated_at = self.updated_at.max(now);
        self
    }

    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot {
            tournament: self.tournament.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Public view of a record returned by load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSnapshot {
    pub tournament: Value,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
