//! Quiz content and the play-through state machine

pub mod bank;
mod question;
mod session;

pub use bank::{
    all_questions, max_points_by_level, question_by_id, questions_by_level,
    total_questions_by_level,
};
pub use question::{InvalidLevel, Level, OPTION_COUNT, QuizQuestion};
pub use session::{Advance, AnswerFeedback, QuizSession, ResultRecorder, SessionState};
