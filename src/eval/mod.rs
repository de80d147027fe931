//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `classify(five) -> HandStrength`
//!   `best_hand(hole, board) -> HandResult`

pub mod classifier;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use classifier::classify;
pub use evaluator::best_hand;
pub use hand_rank::HandCategory;
