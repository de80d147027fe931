use crate::domain::card::Card;
use crate::domain::hand::HandResult;
use crate::engine::errors::EngineError;
use crate::engine::validation::{validate_count, validate_distinct, BOARD_SIZE, HOLE_SIZE};

use super::classifier::classify_five;

/// Главная функция: вычислить лучшую 5-карточную руку из hole + board.
///
/// Требуется ровно 2 карманные карты и 5 карт борда, все 7 различны.
pub fn best_hand(hole: &[Card], board: &[Card]) -> Result<HandResult, EngineError> {
    validate_count(hole, HOLE_SIZE)?;
    validate_count(board, BOARD_SIZE)?;

    let mut all_cards = [board[0]; HOLE_SIZE + BOARD_SIZE];
    all_cards[..HOLE_SIZE].copy_from_slice(hole);
    all_cards[HOLE_SIZE..].copy_from_slice(board);
    validate_distinct(&all_cards)?;

    Ok(best_of_all_5card_combinations(&all_cards))
}

/// Перебираем все C(7,5)=21 комбинации и выбираем лучшую.
///
/// Начинаем с чистого борда (карты борда лежат в хвосте массива) и заменяем
/// только строго более сильной комбинацией: при равной силе `cards_used`
/// остаётся бордом и показывает, что рука игрока не лучше стола.
fn best_of_all_5card_combinations(cards: &[Card; 7]) -> HandResult {
    let n = cards.len();
    let board = [cards[2], cards[3], cards[4], cards[5], cards[6]];
    let mut best = HandResult {
        strength: classify_five(&board),
        cards_used: board,
    };

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = classify_five(&five);
                        if strength > best.strength {
                            best = HandResult {
                                strength,
                                cards_used: five,
                            };
                        }
                    }
                }
            }
        }
    }

    best
}
