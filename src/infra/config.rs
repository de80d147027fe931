//! Настройки стресс-прогона из переменных окружения.
//!
//!   STRESS_TEST_MULTIPLIER – сколько раздач сыграть (по умолчанию 1000)
//!   POKER_STRESS_SEED      – seed для воспроизводимой раздачи карт
//!   POKER_STRESS_PLAYERS   – игроков за столом, 2..=10 (по умолчанию 4)

use std::env;

use thiserror::Error;

pub const ENV_ROUNDS: &str = "STRESS_TEST_MULTIPLIER";
pub const ENV_SEED: &str = "POKER_STRESS_SEED";
pub const ENV_PLAYERS: &str = "POKER_STRESS_PLAYERS";

/// 2 карты на игрока + 5 на борд ≤ 52.
pub const MAX_PLAYERS: usize = 10;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: не удалось разобрать значение {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("POKER_STRESS_PLAYERS: допустимо от 2 до 10 игроков, получено {0}")]
    PlayersOutOfRange(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StressConfig {
    pub rounds: u64,
    pub seed: Option<u64>,
    pub players: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            seed: None,
            players: 4,
        }
    }
}

impl StressConfig {
    /// Прочитать настройки из окружения процесса.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// То же, но с произвольным источником значений (удобно для тестов).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_ROUNDS) {
            cfg.rounds = parse_value(ENV_ROUNDS, &v)?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            cfg.seed = Some(parse_value(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_PLAYERS) {
            cfg.players = parse_value(ENV_PLAYERS, &v)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (2..=MAX_PLAYERS).contains(&self.players) {
            Ok(())
        } else {
            Err(ConfigError::PlayersOutOfRange(self.players))
        }
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
