pub mod tournament_service;

pub use tournament_service::{SaveOutcome, SaveTournament, ServiceError, TournamentService};
