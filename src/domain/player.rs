use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Игрок на шоудауне: id, участвует ли ещё в раздаче, карманные карты.
///
/// Движок только читает эти данные и никогда их не меняет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: PlayerId,
    /// `false` — игрок сфолдил, его карты не оцениваются.
    pub active: bool,
    /// Карманные карты (0 или 2 для холдема).
    pub hand: Vec<Card>,
}

impl PlayerEntry {
    pub fn new(id: impl Into<PlayerId>, hand: Vec<Card>) -> Self {
        Self {
            id: id.into(),
            active: true,
            hand,
        }
    }

    /// Игрок без карт и вне раздачи.
    pub fn folded(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            active: false,
            hand: Vec::new(),
        }
    }

    pub fn fold(&mut self) {
        self.active = false;
    }
}
