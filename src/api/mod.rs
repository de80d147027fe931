//! Внешнее представление результатов шоудауна.
//!
//! DTO (dto.rs) — JSON-формы для фронта и CLI: числовой score 0..=8 и
//! ранги 2..=14 появляются только здесь.

pub mod dto;

pub use dto::*;
