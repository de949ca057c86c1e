pub mod client;
pub mod models;

pub use client::FeedClient;
pub use models::{
    EventKind, HalfTimeScore, League, MatchDetails, MatchEvent, MatchStatus, MatchSummary, Team,
};
