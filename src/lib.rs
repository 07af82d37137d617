//! SkyQuiz - aircraft trivia with local progress tracking
//!
//! A player picks a difficulty level and answers multiple-choice questions
//! about aircraft types. Finished rounds are stored locally and feed personal
//! statistics, one-way achievements and a cross-player leaderboard.
//!
//! ## Components
//!
//! 1. **Quiz** ([`quiz`]): the static question bank and the [`QuizSession`]
//!    state machine that walks a round and reports its result.
//!
//! 2. **Progress** ([`progress`]): the [`ProgressStore`] service that records
//!    results and maintains stats, achievements and the leaderboard.
//!
//! 3. **Storage** ([`storage`]): the key-value backends progress is kept in.

pub mod config;
pub mod progress;
pub mod quiz;
pub mod storage;

pub use progress::ProgressStore;
pub use quiz::{Level, QuizSession};
