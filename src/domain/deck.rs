use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Ошибки колоды.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// Карты закончились — перед следующей раздачей нужен `reset`.
    #[error("Колода пуста, нужен reset перед раздачей")]
    Exhausted,
}

/// Колода карт. Оставшиеся карты принадлежат только колоде,
/// розданная карта — копия, обратной ссылки нет.
///
/// Все мутирующие операции берут `&mut self`, поэтому общий доступ
/// к одной колоде из нескольких потоков требует внешней синхронизации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Полная колода, сразу перемешанная.
    pub fn new_shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Вернуть в колоду все 52 карты и перемешать заново.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        *self = Self::new_shuffled(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Оставшиеся (не розданные) карты, сверху колоды — последняя.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Взять одну карту сверху колоды.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Взять n карт сверху. Если карт не хватает, колода не меняется.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted);
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        // Порядок как при последовательных deal_card.
        taken.reverse();
        Ok(taken)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
