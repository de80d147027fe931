use std::collections::HashSet;

use crate::domain::card::Card;
use crate::engine::errors::EngineError;

/// Карманных карт у игрока в холдеме.
pub const HOLE_SIZE: usize = 2;
/// Карт на столе к риверу.
pub const BOARD_SIZE: usize = 5;

/// Проверка точного количества карт.
pub fn validate_count(cards: &[Card], expected: usize) -> Result<(), EngineError> {
    if cards.len() == expected {
        Ok(())
    } else {
        Err(EngineError::wrong_count(expected, cards.len()))
    }
}

/// Проверка, что ни одна карта не встречается дважды.
pub fn validate_distinct(cards: &[Card]) -> Result<(), EngineError> {
    let mut seen = HashSet::with_capacity(cards.len());
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(dup) => Err(EngineError::duplicate(*dup)),
        None => Ok(()),
    }
}
