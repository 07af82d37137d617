//! Quiz session state machine
//!
//! A session walks a fixed question list:
//!
//! ```text
//! InProgress(index, score, points) ──advance() on last question──► Completed(score, points)
//!        ▲                                                              │
//!        └───────────────────────────── restart() ──────────────────────┘
//! ```
//!
//! Each question accepts one answer. Entering `Completed` hands a
//! [`GameResult`] to the injected [`ResultRecorder`] exactly once; the
//! recorder swallows its own failures so completion is never blocked.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::bank::questions_by_level;
use super::question::{Level, OPTION_COUNT, QuizQuestion};
use crate::progress::{GameResult, RecordOutcome};

/// Sink for finished rounds
pub trait ResultRecorder: Send + Sync {
    fn record_result(&self, result: &GameResult) -> RecordOutcome;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress { index: usize, score: u32, points: u32 },
    Completed { score: u32, points: u32 },
}

/// Outcome of an accepted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub choice: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub points_awarded: u32,
}

/// What `advance()` did
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on to the question at `index`
    Next { index: usize },
    /// The round just finished and was handed to the recorder
    Completed {
        result: GameResult,
        outcome: RecordOutcome,
    },
    /// The session was already complete; nothing changed
    AlreadyComplete,
}

pub struct QuizSession {
    player_name: String,
    level: Level,
    questions: Vec<QuizQuestion>,
    recorder: Arc<dyn ResultRecorder>,
    state: SessionState,
    /// Answer locked in for the current question
    selected: Option<usize>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a round over the built-in questions for `level`
    pub fn new(player_name: impl Into<String>, level: Level, recorder: Arc<dyn ResultRecorder>) -> Self {
        Self::with_questions(player_name, level, questions_by_level(level).to_vec(), recorder)
    }

    /// Start a round over an explicit question list
    pub fn with_questions(
        player_name: impl Into<String>,
        level: Level,
        questions: Vec<QuizQuestion>,
        recorder: Arc<dyn ResultRecorder>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            level,
            questions,
            recorder,
            state: Self::initial_state(),
            selected: None,
            started_at: Utc::now(),
        }
    }

    fn initial_state() -> SessionState {
        SessionState::InProgress {
            index: 0,
            score: 0,
            points: 0,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    /// The question being asked, `None` once complete or for an empty round
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            SessionState::InProgress { index, .. } => self.questions.get(index),
            SessionState::Completed { .. } => None,
        }
    }

    /// 1-based position of the current question
    pub fn question_number(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { index, .. } if index < self.questions.len() => Some(index + 1),
            _ => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        match self.state {
            SessionState::InProgress { score, .. } | SessionState::Completed { score, .. } => score,
        }
    }

    pub fn points(&self) -> u32 {
        match self.state {
            SessionState::InProgress { points, .. } | SessionState::Completed { points, .. } => points,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Lock in an answer for the current question.
    ///
    /// Returns `None` (and changes nothing) if an answer was already given,
    /// the choice is not a valid option, or the round is over.
    pub fn select_answer(&mut self, choice: usize) -> Option<AnswerFeedback> {
        if self.selected.is_some() || choice >= OPTION_COUNT {
            return None;
        }
        let SessionState::InProgress { index, score, points } = self.state else {
            return None;
        };
        let question = self.questions.get(index)?;

        let is_correct = question.is_correct(choice);
        let points_awarded = if is_correct { question.points } else { 0 };
        self.selected = Some(choice);
        self.state = SessionState::InProgress {
            index,
            score: score + u32::from(is_correct),
            points: points + points_awarded,
        };

        Some(AnswerFeedback {
            choice,
            correct_answer: question.correct_answer,
            is_correct,
            points_awarded,
        })
    }

    /// Move to the next question, or finish the round and record it
    pub fn advance(&mut self) -> Advance {
        let SessionState::InProgress { index, score, points } = self.state else {
            return Advance::AlreadyComplete;
        };

        if index + 1 < self.questions.len() {
            self.state = SessionState::InProgress {
                index: index + 1,
                score,
                points,
            };
            self.selected = None;
            return Advance::Next { index: index + 1 };
        }

        self.state = SessionState::Completed { score, points };
        self.selected = None;
        let result = self.build_result(score, points);
        let outcome = self.recorder.record_result(&result);
        Advance::Completed { result, outcome }
    }

    /// Back to the first question with a clean score and a new start time
    pub fn restart(&mut self) {
        self.state = Self::initial_state();
        self.selected = None;
        self.started_at = Utc::now();
    }

    fn build_result(&self, score: u32, points: u32) -> GameResult {
        let elapsed = (Utc::now() - self.started_at).num_seconds().max(0) as u64;
        GameResult::new(
            self.player_name.clone(),
            self.level,
            score,
            points,
            self.questions.len() as u32,
            self.max_points(),
            elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectingRecorder {
        results: Mutex<Vec<GameResult>>,
    }

    impl ResultRecorder for CollectingRecorder {
        fn record_result(&self, result: &GameResult) -> RecordOutcome {
            self.results.lock().unwrap().push(result.clone());
            RecordOutcome::default()
        }
    }

    fn session(level: Level) -> (QuizSession, Arc<CollectingRecorder>) {
        let recorder = Arc::new(CollectingRecorder::default());
        (QuizSession::new("Ana", level, recorder.clone()), recorder)
    }

    fn answer_all_correctly(session: &mut QuizSession) -> Advance {
        loop {
            let correct = session.current_question().unwrap().correct_answer;
            session.select_answer(correct).unwrap();
            match session.advance() {
                Advance::Next { .. } => continue,
                done => return done,
            }
        }
    }

    #[test]
    fn test_starts_at_first_question() {
        let (session, _) = session(Level::Easy);
        assert_eq!(
            session.state(),
            SessionState::InProgress { index: 0, score: 0, points: 0 }
        );
        assert_eq!(session.question_number(), Some(1));
        assert_eq!(session.current_question().unwrap().id, 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_correct_answer_scores_question_points() {
        let (mut session, _) = session(Level::Medium);
        let correct = session.current_question().unwrap().correct_answer;

        let feedback = session.select_answer(correct).unwrap();

        assert!(feedback.is_correct);
        assert_eq!(feedback.points_awarded, 20);
        assert_eq!((session.score(), session.points()), (1, 20));
    }

    #[test]
    fn test_second_selection_is_ignored() {
        let (mut session, _) = session(Level::Easy);
        let correct = session.current_question().unwrap().correct_answer;
        let wrong = (correct + 1) % OPTION_COUNT;

        assert!(!session.select_answer(wrong).unwrap().is_correct);
        assert_eq!(session.select_answer(correct), None);
        assert_eq!(session.selected_answer(), Some(wrong));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_out_of_range_choice_does_not_lock() {
        let (mut session, _) = session(Level::Easy);
        assert_eq!(session.select_answer(OPTION_COUNT), None);
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_advance_clears_selection_lock() {
        let (mut session, _) = session(Level::Easy);
        session.select_answer(0);
        assert_eq!(session.advance(), Advance::Next { index: 1 });
        assert_eq!(session.selected_answer(), None);
        assert!(session.select_answer(0).is_some());
    }

    #[test]
    fn test_completion_records_once() {
        let (mut session, recorder) = session(Level::Hard);

        let Advance::Completed { result, .. } = answer_all_correctly(&mut session) else {
            panic!("round should complete");
        };

        assert_eq!(session.state(), SessionState::Completed { score: 8, points: 240 });
        assert_eq!(result.percentage, 100);
        assert_eq!(result.total_questions, 8);
        assert_eq!(result.max_points, 240);
        assert_eq!(result.level, Level::Hard);
        assert_eq!(result.player_name, "Ana");

        assert_eq!(session.advance(), Advance::AlreadyComplete);
        assert_eq!(session.select_answer(0), None);
        assert!(session.current_question().is_none());
        assert_eq!(recorder.results.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_skipped_questions_count_as_wrong() {
        let (mut session, recorder) = session(Level::Easy);
        while let Advance::Next { .. } = session.advance() {}

        let recorded = recorder.results.lock().unwrap();
        assert_eq!(recorded[0].score, 0);
        assert_eq!(recorded[0].percentage, 0);
    }

    #[test]
    fn test_restart_resets_state() {
        let (mut session, recorder) = session(Level::Easy);
        answer_all_correctly(&mut session);
        let first_start = session.started_at();

        session.restart();

        assert_eq!(
            session.state(),
            SessionState::InProgress { index: 0, score: 0, points: 0 }
        );
        assert!(session.started_at() >= first_start);
        answer_all_correctly(&mut session);
        assert_eq!(recorder.results.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_round_completes_immediately() {
        let recorder = Arc::new(CollectingRecorder::default());
        let mut session = QuizSession::with_questions("Bo", Level::Mixed, Vec::new(), recorder);

        assert!(session.current_question().is_none());
        let Advance::Completed { result, .. } = session.advance() else {
            panic!("empty round should complete");
        };
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.percentage, 0);
    }
}
