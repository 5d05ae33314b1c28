//! Shared types used across the codebase

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Length of the canonical hyphenated UUID text form
const UUID_TEXT_LEN: usize = 36;

/// Byte offsets of the group separators in `8-4-4-4-12`
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid tournament id: {0}")]
pub struct InvalidTournamentId(pub String);

/// Identifier of a tournament record.
///
/// Only the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form is accepted
/// (any version, either case). The string is kept exactly as supplied and is
/// used verbatim as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TournamentId(String);

impl TournamentId {
    pub fn parse(raw: &str) -> Result<Self, InvalidTournamentId> {
        if is_canonical_uuid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidTournamentId(raw.to_string()))
        }
    }

    /// Fresh server-side identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TournamentId {
    type Error = InvalidTournamentId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_canonical_uuid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidTournamentId(value))
        }
    }
}

impl From<TournamentId> for String {
    fn from(id: TournamentId) -> Self {
        id.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks the 8-4-4-4-12 hex layout without going through `Uuid::parse_str`,
/// which also accepts braced, URN and simple forms.
pub fn is_canonical_uuid(raw: &str) -> bool {
    if raw.len() != UUID_TEXT_LEN {
        return false;
    }

    raw.bytes().enumerate().all(|(i, b)| {
        if UUID_HYPHENS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}
