//! Player name validation

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerNameError {
    #[error("Please enter a player name")]
    Empty,

    #[error("Player name must be at least 2 characters long")]
    TooShort,

    #[error("Player name must be at most 20 characters long")]
    TooLong,
}

/// Trim a raw name and check its length (counted in characters)
pub fn validate_player_name(raw: &str) -> Result<String, PlayerNameError> {
    let name = raw.trim();
    match name.chars().count() {
        0 => Err(PlayerNameError::Empty),
        n if n < MIN_NAME_LEN => Err(PlayerNameError::TooShort),
        n if n > MAX_NAME_LEN => Err(PlayerNameError::TooLong),
        _ => Ok(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_accepts_bounds() {
        assert_eq!(validate_player_name("  Bo "), Ok("Bo".to_string()));
        assert_eq!(validate_player_name(&"x".repeat(20)), Ok("x".repeat(20)));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(validate_player_name("   "), Err(PlayerNameError::Empty));
        assert_eq!(validate_player_name("A"), Err(PlayerNameError::TooShort));
        assert_eq!(validate_player_name(&"x".repeat(21)), Err(PlayerNameError::TooLong));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(validate_player_name("Ño"), Ok("Ño".to_string()));
    }
}
