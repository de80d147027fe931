use serde::{Deserialize, Serialize};

/// Карта во внешнем виде: ранг 2..=14 и масть `c`/`d`/`h`/`s`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub rank: u8,
    pub suit: char,
}

/// Лучшая рука игрока в том виде, в каком её ждёт фронт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandResultDto {
    /// Название категории ("Full house").
    #[serde(rename = "type")]
    pub kind: String,
    /// 0 (старшая карта) ..= 8 (стрит-флеш).
    pub score: u8,
    pub cards_used: Vec<CardDto>,
    /// Ранги для разрешения ничьей, от старшего.
    pub high_hand_cards: Vec<u8>,
}

/// Итог шоудауна. Поле `outcome` различает варианты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WinnerDto {
    Winner {
        #[serde(flatten)]
        hand: HandResultDto,
        owner: String,
    },
    /// Ничья между конкретными игроками.
    TrueDraw {
        #[serde(flatten)]
        hand: HandResultDto,
        owners: Vec<String>,
    },
    /// Играет борд: делят все активные игроки.
    TableWin {
        #[serde(flatten)]
        hand: HandResultDto,
        owners: Vec<String>,
    },
}

/// Игрок во входном JSON: карты строками ("Ah", "10d").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInputDto {
    pub id: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub hand: Vec<String>,
}

fn default_active() -> bool {
    true
}

/// Входные данные CLI: игроки + борд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableInputDto {
    pub players: Vec<PlayerInputDto>,
    pub board: Vec<String>,
}
