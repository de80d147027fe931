//! Определение победителя на шоудауне.

use log::debug;

use crate::domain::card::Card;
use crate::domain::hand::{HandResult, WinnerResult, WinningHand};
use crate::domain::player::PlayerEntry;
use crate::engine::errors::{EngineError, HandInputError};
use crate::engine::validation::{validate_count, validate_distinct, BOARD_SIZE, HOLE_SIZE};
use crate::eval::best_hand;
use crate::eval::classifier::classify_five;

/// Найти победителя (или со-победителей) среди активных игроков.
///
/// - один активный игрок выигрывает при любых картах;
/// - несколько игроков с равной лучшей рукой: если эта рука лежит на столе
///   целиком, делят все активные игроки (`BoardPlays`), иначе — только
///   игроки с этой рукой (`Split`).
///
/// Сфолдившие игроки не оцениваются, их карты не проверяются.
/// Владельцы в результате упорядочены по id.
pub fn get_winner<'a, I>(players: I, board: &[Card]) -> Result<WinnerResult, EngineError>
where
    I: IntoIterator<Item = &'a PlayerEntry>,
{
    let mut active: Vec<&PlayerEntry> = players.into_iter().filter(|p| p.active).collect();
    active.sort_by(|a, b| a.id.cmp(&b.id));

    if active.is_empty() {
        return Err(EngineError::NoActivePlayers);
    }
    validate_table(&active, board)?;

    let mut hands: Vec<WinningHand> = Vec::with_capacity(active.len());
    for p in &active {
        let hand = best_hand(&p.hand, board).map_err(|e| e.for_player(&p.id))?;
        debug!(
            "showdown: {} [{} {}] -> {}",
            p.id,
            p.hand[0],
            p.hand[1],
            hand.strength.describe()
        );
        hands.push(WinningHand {
            owner: p.id.clone(),
            hand,
        });
    }

    if hands.len() == 1 {
        let only = hands.remove(0);
        debug!("showdown: единственный активный игрок {} забирает банк", only.owner);
        return Ok(WinnerResult::Single(only));
    }

    let best = hands
        .iter()
        .map(|w| w.hand.strength)
        .max()
        .ok_or(EngineError::NoActivePlayers)?;

    let mut tied: Vec<WinningHand> = hands
        .iter()
        .filter(|w| w.hand.strength == best)
        .cloned()
        .collect();
    let on_board = board_hand(board);

    let result = if tied.len() == 1 {
        WinnerResult::Single(tied.remove(0))
    } else if on_board.strength == best {
        // Борд — лучшая рука: все активные игроки его как минимум повторяют,
        // значит все они и в числе равных.
        WinnerResult::BoardPlays {
            owners: hands.into_iter().map(|w| w.owner).collect(),
            hand: on_board,
        }
    } else {
        WinnerResult::Split(tied)
    };

    debug!(
        "showdown: {} ({}) -> {:?}",
        result.strength().describe(),
        match &result {
            WinnerResult::Single(_) => "winner",
            WinnerResult::Split(_) => "true draw",
            WinnerResult::BoardPlays { .. } => "board plays",
        },
        result.owners()
    );

    Ok(result)
}

/// Проверка стола целиком: 5 карт борда, id активных игроков уникальны,
/// по 2 карты у каждого, ни одна карта не встречается дважды.
///
/// `active` уже отсортирован по id, поэтому повтор id — соседние записи.
fn validate_table(active: &[&PlayerEntry], board: &[Card]) -> Result<(), EngineError> {
    validate_count(board, BOARD_SIZE)?;
    if let Some(pair) = active.windows(2).find(|pair| pair[0].id == pair[1].id) {
        return Err(HandInputError::DuplicatePlayer(pair[0].id.clone()).into());
    }
    for p in active {
        validate_count(&p.hand, HOLE_SIZE).map_err(|e| e.for_player(&p.id))?;
    }

    let all_cards: Vec<Card> = board
        .iter()
        .chain(active.iter().flat_map(|p| p.hand.iter()))
        .copied()
        .collect();
    validate_distinct(&all_cards)
}

/// Рука, которую 5 карт стола собирают сами по себе.
fn board_hand(board: &[Card]) -> HandResult {
    let five = [board[0], board[1], board[2], board[3], board[4]];
    HandResult {
        strength: classify_five(&five),
        cards_used: five,
    }
}
