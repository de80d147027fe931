//! Классификация строго 5-карточной комбинации.

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandStrength;
use crate::engine::errors::EngineError;
use crate::engine::validation::validate_distinct;

use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Классифицировать ровно 5 различных карт.
///
/// Неверное количество карт или повтор карты — ошибка вызывающей стороны.
pub fn classify(cards: &[Card]) -> Result<HandStrength, EngineError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| EngineError::wrong_count(5, cards.len()))?;
    validate_distinct(five)?;
    Ok(classify_five(five))
}

/// Оценка 5 карт без проверок (карты уже проверены вызывающим кодом).
pub(crate) fn classify_five(cards: &[Card; 5]) -> HandStrength {
    // Подсчёт рангов, индекс = значение ранга (2..=14).
    let mut rank_counts = [0u8; 15];
    let mut rank_mask: RankMask = 0;

    for card in cards {
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(rank_mask);

    // (ранг, количество) от старшего к младшему, затем по количеству (desc).
    // Сортировка стабильная, поэтому при равном количестве старший ранг остаётся первым.
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter(|r| rank_counts[**r as usize] > 0)
        .map(|&r| (r, rank_counts[r as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let ranks: Vec<Rank> = groups.iter().map(|g| g.0).collect();

    if let (true, Some(high)) = (is_flush, straight_high) {
        return HandStrength::StraightFlush { high };
    }

    match pattern.as_slice() {
        [4, 1] => {
            return HandStrength::FourOfAKind {
                quads: ranks[0],
                kicker: ranks[1],
            }
        }
        [3, 2] => {
            return HandStrength::FullHouse {
                trips: ranks[0],
                pair: ranks[1],
            }
        }
        _ => {}
    }

    if is_flush {
        return HandStrength::Flush(five_ranks(&ranks));
    }

    if let Some(high) = straight_high {
        return HandStrength::Straight { high };
    }

    match pattern.as_slice() {
        [3, 1, 1] => HandStrength::ThreeOfAKind {
            trips: ranks[0],
            kickers: [ranks[1], ranks[2]],
        },
        [2, 2, 1] => HandStrength::TwoPair {
            high: ranks[0],
            low: ranks[1],
            kicker: ranks[2],
        },
        [2, 1, 1, 1] => HandStrength::OnePair {
            pair: ranks[0],
            kickers: [ranks[1], ranks[2], ranks[3]],
        },
        _ => HandStrength::HighCard(five_ranks(&ranks)),
    }
}

/// Пять различных рангов (уже по убыванию) как массив.
fn five_ranks(ranks: &[Rank]) -> [Rank; 5] {
    [ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]]
}
