//! Движок шоудауна: проверка входных данных и определение победителя.
//!
//! Основная операция:
//!   - `get_winner` – лучшая рука каждого активного игрока и итог раздачи

pub mod errors;
pub mod showdown;
pub mod validation;

pub use errors::{EngineError, HandInputError};
pub use showdown::get_winner;

/// RNG интерфейс для перемешивания колоды.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
