//! Host-side session: which screen is up, who is playing, how they did.
//! Owned by the app shell; the engine only ever sees the completion callback.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Reducible;

/// Local scoreboard length.
pub const SCOREBOARD_LEN: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Register,
    Game,
    Results,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}

impl PlayerProfile {
    /// Trims every field; name and email must be non-empty.
    pub fn new(name: &str, email: &str, company: &str) -> Result<Self, ProfileError> {
        let name = name.trim();
        let email = email.trim();
        let company = company.trim();
        if name.is_empty() {
            return Err(ProfileError::MissingName);
        }
        if email.is_empty() {
            return Err(ProfileError::MissingEmail);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub company: Option<String>,
    pub score: u32,
}

/// Best results of this page session, highest first. Earlier entries win ties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// Inserts `entry` and returns its 1-based rank, or `None` if it did not
    /// make the board.
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());
        if pos >= SCOREBOARD_LEN {
            return None;
        }
        self.entries.insert(pos, entry);
        self.entries.truncate(SCOREBOARD_LEN);
        Some(pos + 1)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub screen: Screen,
    pub player: Option<PlayerProfile>,
    pub last_score: Option<u32>,
    /// Rank of `last_score` on the scoreboard, if it placed.
    pub last_rank: Option<usize>,
    pub scoreboard: Scoreboard,
    /// Bumped per game so the view mounts a fresh engine.
    pub run_id: u64,
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    Register(PlayerProfile),
    Finish(u32),
    PlayAgain,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            Register(profile) => {
                if new.screen != Screen::Register {
                    return self;
                }
                log::info!("player registered: {}", profile.name);
                new.player = Some(profile);
                new.last_score = None;
                new.last_rank = None;
                new.run_id += 1;
                new.screen = Screen::Game;
            }
            Finish(score) => {
                // a late callback from a torn-down game must not flip screens
                if new.screen != Screen::Game {
                    return self;
                }
                let Some(player) = new.player.clone() else {
                    return self;
                };
                new.last_score = Some(score);
                new.last_rank = new.scoreboard.record(ScoreEntry {
                    name: player.name,
                    company: player.company,
                    score,
                });
                new.screen = Screen::Results;
            }
            PlayAgain => {
                new.player = None;
                new.last_score = None;
                new.last_rank = None;
                new.screen = Screen::Register;
            }
        }
        Rc::new(new)
    }
}
