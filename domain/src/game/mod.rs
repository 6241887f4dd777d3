//! The round itself: board letters, rule configuration, calendar and the
//! typed question set.

pub mod alphabet;
pub mod context;
pub mod question_set;
pub mod rules;

pub use alphabet::Alphabet;
pub use context::{
    DEFAULT_TOPICS, DEFAULT_TOPICS_PER_GAME, GameContext, default_start_date, game_number_for,
    pick_topics,
};
pub use question_set::{QuestionEntry, QuestionSet};
pub use rules::{DEFAULT_SET_ID, GameRules, PrefixTemplates};
