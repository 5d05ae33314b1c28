pub mod token;
pub mod tournament;
