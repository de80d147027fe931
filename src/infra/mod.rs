//! Инфраструктурный слой вокруг движка шоудауна:
//! - RNG-реализации для колоды;
//! - настройки из окружения;
//! - раздача и стресс-прогоны;
//! - маппинги между API и domain.

pub mod config;
pub mod dealer;
pub mod mapping;
pub mod rng;

pub use config::{ConfigError, StressConfig};
pub use dealer::{deal_table, run_stress, StressError, StressStats};
pub use mapping::*;
pub use rng::*;
