// handlers/tournament/mod.rs - Tournament record handlers

pub mod delete; // DELETE /tournament/:id
pub mod load;   // GET /load?id=
pub mod save;   // POST /save

pub use delete::tournament_delete;
pub use load::tournament_load;
pub use save::tournament_save;
