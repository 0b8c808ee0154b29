pub mod session;

pub use session::{
    PlayerProfile, ProfileError, ScoreEntry, Scoreboard, Screen, Session, SessionAction,
};
