use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::PlayerId;

/// Сила 5-карточной руки: категория + свои кикеры.
///
/// Порядок вариантов совпадает с силой категорий, а поля внутри варианта
/// перечислены от старшего к младшему, поэтому derive(Ord) даёт ровно
/// покерный порядок: сначала категория, потом кикеры лексикографически.
/// Методы (категория, кикеры, описание) — в `eval::hand_rank`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandStrength {
    HighCard([Rank; 5]),
    OnePair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    ThreeOfAKind { trips: Rank, kickers: [Rank; 2] },
    /// Для wheel (A2345) старшая карта — пятёрка.
    Straight { high: Rank },
    Flush([Rank; 5]),
    FullHouse { trips: Rank, pair: Rank },
    FourOfAKind { quads: Rank, kicker: Rank },
    StraightFlush { high: Rank },
}

/// Лучшая рука игрока: сила + 5 карт, из которых она собрана.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub strength: HandStrength,
    pub cards_used: [Card; 5],
}

impl HandResult {
    /// Категория 0..=8 (0 — старшая карта, 8 — стрит-флеш).
    pub fn score(&self) -> u8 {
        self.strength.category().score()
    }

    /// Название категории ("Full house" и т.п.).
    pub fn name(&self) -> &'static str {
        self.strength.category().name()
    }

    /// Ранги для разрешения ничьей внутри категории, от старшего.
    pub fn high_hand_cards(&self) -> Vec<Rank> {
        self.strength.high_hand_cards()
    }

    /// Собрана ли рука целиком из данных карт (например, из борда).
    pub fn is_formed_from(&self, cards: &[Card]) -> bool {
        self.cards_used.iter().all(|c| cards.contains(c))
    }
}

/// Победитель (или один из со-победителей) с его рукой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinningHand {
    pub owner: PlayerId,
    pub hand: HandResult,
}

/// Итог шоудауна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum WinnerResult {
    /// Ровно один победитель.
    Single(WinningHand),
    /// Настоящая ничья: у нескольких игроков одинаковая лучшая рука,
    /// и хотя бы одна решающая карта — карманная.
    ///
    /// `get_winner` всегда кладёт сюда минимум две руки, `hand()` на это
    /// полагается.
    Split(Vec<WinningHand>),
    /// Играет борд: лучшая рука целиком на столе, делят все активные игроки.
    BoardPlays { owners: Vec<PlayerId>, hand: HandResult },
}

impl WinnerResult {
    /// Все со-владельцы выигрыша (для Single — один).
    pub fn owners(&self) -> Vec<&PlayerId> {
        match self {
            WinnerResult::Single(w) => vec![&w.owner],
            WinnerResult::Split(ws) => ws.iter().map(|w| &w.owner).collect(),
            WinnerResult::BoardPlays { owners, .. } => owners.iter().collect(),
        }
    }

    /// Выигрышная рука. Для Split все руки равны по силе, берём первую.
    ///
    /// # Panics
    ///
    /// Если `Split` пуст (такой результат `get_winner` не возвращает).
    pub fn hand(&self) -> &HandResult {
        match self {
            WinnerResult::Single(w) => &w.hand,
            WinnerResult::Split(ws) => &ws[0].hand,
            WinnerResult::BoardPlays { hand, .. } => hand,
        }
    }

    pub fn strength(&self) -> HandStrength {
        self.hand().strength
    }

    pub fn is_draw(&self) -> bool {
        !matches!(self, WinnerResult::Single(_))
    }
}
