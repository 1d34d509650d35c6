pub mod api;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod letters;
pub mod score;
pub mod store;

pub use dictionary::Dictionary;
pub use error::{GameError, GameResult};
pub use game::{GameService, GameSummary};
