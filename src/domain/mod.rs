//! Доменная модель шоудауна: карты, колода, игроки, руки и итог раздачи.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;

/// Идентификатор игрока за столом ("player", "ai1", ...).
pub type PlayerId = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
