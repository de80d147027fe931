use thiserror::Error;

use crate::domain::{Card, PlayerId};

/// Ошибки движка шоудауна.
///
/// Все они означают баг во входных данных вызывающей стороны,
/// повторять вызов с теми же данными бессмысленно.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректный набор карт: {0}")]
    MalformedHandInput(#[from] HandInputError),

    #[error("Нет активных игроков для определения победителя")]
    NoActivePlayers,
}

/// Причина, по которой набор карт нельзя оценить.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HandInputError {
    #[error("ожидалось {expected} карт, получено {actual}")]
    WrongCardCount { expected: usize, actual: usize },

    #[error("карта {0} встречается больше одного раза")]
    DuplicateCard(Card),

    #[error("игрок {0} указан за столом больше одного раза")]
    DuplicatePlayer(PlayerId),

    #[error("у игрока {player}: {source}")]
    Player {
        player: PlayerId,
        #[source]
        source: Box<HandInputError>,
    },
}

impl EngineError {
    pub fn wrong_count(expected: usize, actual: usize) -> Self {
        HandInputError::WrongCardCount { expected, actual }.into()
    }

    pub fn duplicate(card: Card) -> Self {
        HandInputError::DuplicateCard(card).into()
    }

    /// Привязать ошибку входных данных к конкретному игроку.
    pub fn for_player(self, player: &PlayerId) -> Self {
        match self {
            EngineError::MalformedHandInput(source) => HandInputError::Player {
                player: player.clone(),
                source: Box::new(source),
            }
            .into(),
            other => other,
        }
    }
}
