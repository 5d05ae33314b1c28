// handlers/mod.rs - HTTP handlers
//
// Public (no auth): /, /health, GET /load
// Token-gated per record: POST /save, DELETE /tournament/:id
//
// Handlers stay thin: extract inputs, resolve the admin token, call
// TournamentService, map ServiceError through ApiError.
pub mod system;
pub mod tournament;

pub use system::{health, root};
pub use tournament::{tournament_delete, tournament_load, tournament_save};
