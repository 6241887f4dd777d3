//! Game calendar and the context bundle handed to collaborators.

use crate::core::error::DomainError;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Default topic pool for daily rounds.
pub const DEFAULT_TOPICS: [&str; 11] = [
    "Astronomía",
    "Biología",
    "Música",
    "Deporte",
    "Ciencia",
    "Cine",
    "Historia",
    "Geografía",
    "Arte",
    "Folklore",
    "Cultura",
];

/// Number of topics drawn for each round.
pub const DEFAULT_TOPICS_PER_GAME: usize = 3;

/// Day the first game ("No. 1") was published.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default()
}

/// Sequence number of the game played on `date`.
///
/// Day one is `start`; dates before it clamp to game 1.
pub fn game_number_for(date: NaiveDate, start: NaiveDate) -> u32 {
    let delta = (date - start).num_days();
    u32::try_from(delta.saturating_add(1)).unwrap_or(0).max(1)
}

/// Draw `count` distinct topics from `pool`.
pub fn pick_topics<R: Rng + ?Sized>(
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, DomainError> {
    if count > pool.len() {
        return Err(DomainError::NotEnoughTopics {
            requested: count,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, count).cloned().collect())
}

/// Date, sequence number and topics of the round being generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    pub date: NaiveDate,
    pub game_number: u32,
    pub topics: Vec<String>,
}

impl GameContext {
    pub fn new(date: NaiveDate, start: NaiveDate, topics: Vec<String>) -> Self {
        Self {
            date,
            game_number: game_number_for(date, start),
            topics,
        }
    }

    /// Title every set for this round must carry.
    pub fn title(&self) -> String {
        format!(
            "Pasalacabra {} · No. {}",
            self.date.format("%Y-%m-%d"),
            self.game_number
        )
    }

    pub fn topics_joined(&self) -> String {
        self.topics.join(", ")
    }
}
