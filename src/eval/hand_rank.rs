use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandStrength;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Числовой score 0..=8 — только для внешнего представления.
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn from_score(score: u8) -> Option<HandCategory> {
        Self::ALL.get(score as usize).copied()
    }

    /// Человеческое название категории.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl HandStrength {
    /// Вытащить категорию из силы руки.
    pub fn category(&self) -> HandCategory {
        match self {
            HandStrength::HighCard(_) => HandCategory::HighCard,
            HandStrength::OnePair { .. } => HandCategory::OnePair,
            HandStrength::TwoPair { .. } => HandCategory::TwoPair,
            HandStrength::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            HandStrength::Straight { .. } => HandCategory::Straight,
            HandStrength::Flush(_) => HandCategory::Flush,
            HandStrength::FullHouse { .. } => HandCategory::FullHouse,
            HandStrength::FourOfAKind { .. } => HandCategory::FourOfAKind,
            HandStrength::StraightFlush { .. } => HandCategory::StraightFlush,
        }
    }

    /// Ранги, решающие ничью внутри категории (от старшего к младшему).
    pub fn high_hand_cards(&self) -> Vec<Rank> {
        match *self {
            HandStrength::HighCard(ranks) | HandStrength::Flush(ranks) => ranks.to_vec(),
            HandStrength::OnePair { pair, kickers } => {
                let mut v = vec![pair];
                v.extend_from_slice(&kickers);
                v
            }
            HandStrength::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandStrength::ThreeOfAKind { trips, kickers } => {
                let mut v = vec![trips];
                v.extend_from_slice(&kickers);
                v
            }
            HandStrength::Straight { high } | HandStrength::StraightFlush { high } => vec![high],
            HandStrength::FullHouse { trips, pair } => vec![trips, pair],
            HandStrength::FourOfAKind { quads, kicker } => vec![quads, kicker],
        }
    }

    /// Описание руки для логов и CLI, например "Full house, Aces full of Kings".
    pub fn describe(&self) -> String {
        let name = self.category().name();
        match *self {
            HandStrength::HighCard(r) => format!("{name}, {} high", r[0].name()),
            HandStrength::OnePair { pair, kickers } => {
                format!("{name}, {} with {} kicker", pair.plural_name(), kickers[0].name())
            }
            HandStrength::TwoPair { high, low, kicker } => format!(
                "{name}, {} and {} with {} kicker",
                high.plural_name(),
                low.plural_name(),
                kicker.name()
            ),
            HandStrength::ThreeOfAKind { trips, .. } => format!("{name}, {}", trips.plural_name()),
            HandStrength::Straight { high } | HandStrength::StraightFlush { high } => {
                format!("{name}, {} high", high.name())
            }
            HandStrength::Flush(r) => format!("{name}, {} high", r[0].name()),
            HandStrength::FullHouse { trips, pair } => {
                format!("{name}, {} full of {}", trips.plural_name(), pair.plural_name())
            }
            HandStrength::FourOfAKind { quads, kicker } => {
                format!("{name}, {} with {} kicker", quads.plural_name(), kicker.name())
            }
        }
    }
}
