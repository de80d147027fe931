//! Движок шоудауна Texas Hold'em.
//!
//! Для каждого активного игрока находит лучшую 5-карточную руку из 7 карт
//! (2 карманные + 5 на столе) и определяет победителя, настоящую ничью
//! или ситуацию "играет борд".
//!
//! ```
//! use poker_showdown::domain::{parse_cards, PlayerEntry, WinnerResult};
//! use poker_showdown::engine::get_winner;
//!
//! let board = parse_cards("8d 7c 5s Ks 4d").unwrap();
//! let players = vec![
//!     PlayerEntry::new("player", parse_cards("8h 7s").unwrap()),
//!     PlayerEntry::new("ai3", parse_cards("8c 5c").unwrap()),
//! ];
//!
//! let result = get_winner(&players, &board).unwrap();
//! assert!(matches!(result, WinnerResult::Single(ref w) if w.owner == "player"));
//! ```

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
