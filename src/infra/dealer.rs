//! Раздача карт из колоды и статистика прогонов "раздал → шоудаун".

use log::debug;

use crate::domain::card::Card;
use crate::domain::deck::{Deck, DeckError};
use crate::domain::hand::WinnerResult;
use crate::domain::player::PlayerEntry;
use crate::engine::validation::{BOARD_SIZE, HOLE_SIZE};
use crate::engine::{get_winner, EngineError, RandomSource};
use crate::eval::HandCategory;

/// Раздача одного стола: колода сбрасывается, каждому игроку по 2 карты,
/// затем 5 карт на борд.
pub fn deal_table<R: RandomSource>(
    deck: &mut Deck,
    rng: &mut R,
    ids: &[String],
) -> Result<(Vec<PlayerEntry>, Vec<Card>), DeckError> {
    deck.reset(rng);

    let players = ids
        .iter()
        .map(|id| -> Result<PlayerEntry, DeckError> {
            Ok(PlayerEntry::new(id.clone(), deck.deal_n(HOLE_SIZE)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let board = deck.deal_n(BOARD_SIZE)?;

    Ok((players, board))
}

/// Ошибка прогона: кончилась колода или движок отверг стол.
#[derive(Debug, thiserror::Error)]
pub enum StressError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Счётчики итогов по категориям и видам исхода.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StressStats {
    pub rounds: u64,
    pub single_winners: u64,
    pub true_draws: u64,
    pub board_plays: u64,
    /// Индекс — score выигрышной категории.
    pub by_category: [u64; 9],
}

impl StressStats {
    pub fn record(&mut self, result: &WinnerResult) {
        self.rounds += 1;
        match result {
            WinnerResult::Single(_) => self.single_winners += 1,
            WinnerResult::Split(_) => self.true_draws += 1,
            WinnerResult::BoardPlays { .. } => self.board_plays += 1,
        }
        self.by_category[result.hand().score() as usize] += 1;
    }

    pub fn count(&self, category: HandCategory) -> u64 {
        self.by_category[category.score() as usize]
    }
}

/// Сыграть `rounds` раздач за столом из `players` игроков.
pub fn run_stress<R: RandomSource>(
    rng: &mut R,
    players: usize,
    rounds: u64,
) -> Result<StressStats, StressError> {
    let ids: Vec<String> = (1..=players).map(|i| format!("p{i}")).collect();
    let mut deck = Deck::standard_52();
    let mut stats = StressStats::default();

    for round in 0..rounds {
        let (table, board) = deal_table(&mut deck, rng, &ids)?;
        let result = get_winner(&table, &board)?;
        debug!("round {round}: owners={:?}", result.owners());
        stats.record(&result);
    }

    Ok(stats)
}
