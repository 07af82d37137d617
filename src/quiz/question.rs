use serde::{Deserialize, Serialize};

/// Number of answer options (and images) every question carries
pub const OPTION_COUNT: usize = 4;

/// Difficulty tier of a question or a played round.
///
/// Persisted as its number (`0` = mixed) so stored results keep the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// All levels combined
    Mixed,
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level: {0} (expected 0-3)")]
pub struct InvalidLevel(pub u8);

impl Level {
    /// The three playable tiers, in order
    pub const TIERS: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub const fn number(self) -> u8 {
        match self {
            Level::Mixed => 0,
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
        }
    }

    /// Points awarded per correct answer at this tier (mixed has no scale of its own)
    pub const fn points(self) -> u32 {
        match self {
            Level::Mixed => 0,
            Level::Easy => 10,
            Level::Medium => 20,
            Level::Hard => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Mixed => "All Levels",
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Mixed),
            1 => Ok(Level::Easy),
            2 => Ok(Level::Medium),
            3 => Ok(Level::Hard),
            other => Err(InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single multiple-choice question with one image per option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    /// Index into `options`
    pub correct_answer: usize,
    /// Image asset names, parallel to `options`
    pub images: [&'static str; OPTION_COUNT],
    pub level: Level,
    pub points: u32,
}

impl QuizQuestion {
    /// Build a question whose point value follows its level's scale
    pub const fn new(
        id: u32,
        level: Level,
        question: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct_answer: usize,
        images: [&'static str; OPTION_COUNT],
    ) -> Self {
        assert!(correct_answer < OPTION_COUNT, "correct answer out of range");
        Self {
            id,
            question,
            options,
            correct_answer,
            images,
            level,
            points: level.points(),
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }

    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct_answer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_number_roundtrip_and_rejects_unknown() {
        for level in [Level::Mixed, Level::Easy, Level::Medium, Level::Hard] {
            assert_eq!(Level::try_from(level.number()), Ok(level));
        }
        assert_eq!(Level::try_from(4), Err(InvalidLevel(4)));
    }

    #[test]
    fn test_level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Level::Medium).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Level>("0").unwrap(), Level::Mixed);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }

    #[test]
    fn test_question_points_follow_level() {
        let q = QuizQuestion::new(99, Level::Hard, "?", ["a", "b", "c", "d"], 3, ["", "", "", ""]);
        assert_eq!(q.points, 30);
        assert!(q.is_correct(3));
        assert!(!q.is_correct(0));
        assert_eq!(q.correct_option(), "d");
    }
}
