use thiserror::Error;

use crate::api::dto::{CardDto, HandResultDto, PlayerInputDto, TableInputDto, WinnerDto};
use crate::domain::card::{Card, ParseCardError};
use crate::domain::hand::{HandResult, WinnerResult};
use crate::domain::player::PlayerEntry;

/// Ошибка разбора входного стола.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("игрок {player}: {source}")]
    PlayerCard {
        player: String,
        #[source]
        source: ParseCardError,
    },

    #[error("борд: {0}")]
    BoardCard(#[source] ParseCardError),
}

pub fn map_card_to_dto(card: &Card) -> CardDto {
    CardDto {
        rank: card.rank.value(),
        suit: card.suit.symbol(),
    }
}

/// HandResult -> HandResultDto (тут появляется числовой score).
pub fn map_hand_result_to_dto(hand: &HandResult) -> HandResultDto {
    HandResultDto {
        kind: hand.name().to_string(),
        score: hand.score(),
        cards_used: hand.cards_used.iter().map(map_card_to_dto).collect(),
        high_hand_cards: hand.high_hand_cards().iter().map(|r| r.value()).collect(),
    }
}

pub fn map_winner_to_dto(result: &WinnerResult) -> WinnerDto {
    let hand = map_hand_result_to_dto(result.hand());
    let owners = || result.owners().into_iter().cloned().collect::<Vec<_>>();

    match result {
        WinnerResult::Single(w) => WinnerDto::Winner {
            hand,
            owner: w.owner.clone(),
        },
        WinnerResult::Split(_) => WinnerDto::TrueDraw {
            hand,
            owners: owners(),
        },
        WinnerResult::BoardPlays { .. } => WinnerDto::TableWin {
            hand,
            owners: owners(),
        },
    }
}

fn map_player_from_dto(dto: &PlayerInputDto) -> Result<PlayerEntry, MappingError> {
    let hand = dto
        .hand
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| MappingError::PlayerCard {
            player: dto.id.clone(),
            source,
        })?;

    Ok(PlayerEntry {
        id: dto.id.clone(),
        active: dto.active,
        hand,
    })
}

/// TableInputDto -> (игроки, борд). Количество карт здесь не проверяется —
/// это делает движок.
pub fn map_table_from_dto(
    dto: &TableInputDto,
) -> Result<(Vec<PlayerEntry>, Vec<Card>), MappingError> {
    let players = dto
        .players
        .iter()
        .map(map_player_from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let board = dto
        .board
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(MappingError::BoardCard)?;

    Ok((players, board))
}
