//! Showdown tests для poker-showdown.
//!
//! Здесь проверяем именно "кто сильнее на шоудауне":
//! - единственный активный игрок;
//! - победитель между 2, 3 и 4 игроками;
//! - кикеры при каре/сете на столе;
//! - настоящая ничья и "играет борд".

use poker_showdown::domain::card::{Card, Rank, Suit};
use poker_showdown::domain::hand::{HandStrength, WinnerResult};
use poker_showdown::domain::player::PlayerEntry;
use poker_showdown::engine::get_winner;

use Rank::*;

/// Рука из рангов 2..=14 и строки мастей, например `hand(&[14, 13], "hs")`.
fn hand(ranks: &[u8], suits: &str) -> Vec<Card> {
    assert_eq!(ranks.len(), suits.chars().count());
    ranks
        .iter()
        .zip(suits.chars())
        .map(|(&r, s)| Card::new(Rank::from_value(r).unwrap(), Suit::from_symbol(s).unwrap()))
        .collect()
}

/// Стол из 4 активных игроков без карт: player, ai1, ai2, ai3.
fn table() -> Vec<PlayerEntry> {
    ["player", "ai1", "ai2", "ai3"]
        .iter()
        .map(|id| PlayerEntry::new(*id, Vec::new()))
        .collect()
}

fn seat<'a>(players: &'a mut [PlayerEntry], id: &str) -> &'a mut PlayerEntry {
    players.iter_mut().find(|p| p.id == id).unwrap()
}

fn fold(players: &mut [PlayerEntry], ids: &[&str]) {
    for id in ids {
        seat(players, id).fold();
    }
}

fn deal(players: &mut [PlayerEntry], id: &str, cards: Vec<Card>) {
    seat(players, id).hand = cards;
}

fn single_owner(result: &WinnerResult) -> &str {
    match result {
        WinnerResult::Single(w) => &w.owner,
        other => panic!("ожидался один победитель, получено {other:?}"),
    }
}

//
// ============= Один активный игрок ============
//
#[test]
fn single_active_player_wins_regardless_of_cards() {
    let mut players = table();
    fold(&mut players, &["ai1", "ai2", "ai3"]);
    deal(&mut players, "player", hand(&[2, 2], "hs"));
    let board = hand(&[3, 4, 6, 8, 8], "hcssd");

    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");

    // Полный результат: категория, score, 5 карт и кикеры.
    let h = result.hand();
    assert_eq!(h.name(), "Two pair");
    assert_eq!(h.score(), 2);
    assert_eq!(h.cards_used.len(), 5);
    assert_eq!(h.high_hand_cards(), vec![Eight, Two, Six]);
}

//
// ============= Два игрока с очень разными руками ============
//
#[test]
fn winner_between_two_players_with_different_hands() {
    let mut players = table();
    fold(&mut players, &["ai1", "ai2"]);

    // full house 2-2-2-8-8 против сета восьмёрок
    deal(&mut players, "player", hand(&[2, 2], "hs"));
    deal(&mut players, "ai3", hand(&[8, 6], "hc"));
    let board = hand(&[2, 3, 5, 8, 8], "dcssd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");
    assert_eq!(result.hand().score(), 6);

    // каре двоек против двух пар
    let board = hand(&[2, 2, 10, 8, 10], "dcssd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");
    assert_eq!(
        result.strength(),
        HandStrength::FourOfAKind { quads: Two, kicker: Ten }
    );
}

//
// ============= Два игрока с близкими руками ============
//
#[test]
fn winner_between_two_players_with_similar_hands() {
    let mut players = table();
    fold(&mut players, &["ai1", "ai2"]);

    // стрит до 9 против стрита до 10
    deal(&mut players, "player", hand(&[4, 2], "hs"));
    deal(&mut players, "ai3", hand(&[8, 10], "hc"));
    let board = hand(&[5, 6, 7, 8, 9], "dcssd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai3");
    assert_eq!(result.strength(), HandStrength::Straight { high: Ten });

    // тузы с королями против тузов с дамами
    deal(&mut players, "player", hand(&[13, 12], "hs"));
    deal(&mut players, "ai3", hand(&[12, 12], "hc"));
    let board = hand(&[14, 14, 14, 13, 4], "dcssd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");
    assert_eq!(
        result.strength(),
        HandStrength::FullHouse { trips: Ace, pair: King }
    );

    // две пары: восьмёрки и семёрки против восьмёрок и пятёрок
    deal(&mut players, "player", hand(&[8, 7], "hs"));
    deal(&mut players, "ai3", hand(&[8, 5], "cc"));
    let board = hand(&[8, 7, 5, 13, 4], "dcssd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");
    assert_eq!(result.hand().high_hand_cards(), vec![Eight, Seven, King]);

    // флеш до короля, решает вторая карта: дама против девятки
    deal(&mut players, "player", hand(&[9, 2], "cc"));
    deal(&mut players, "ai3", hand(&[12, 5], "cc"));
    let board = hand(&[3, 7, 13, 13, 4], "cccsd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai3");
    assert_eq!(
        result.strength(),
        HandStrength::Flush([King, Queen, Seven, Five, Three])
    );
}

//
// ============= Три игрока ============
//
#[test]
fn winner_between_three_players() {
    let mut players = table();
    fold(&mut players, &["ai1"]);

    // каре против старшей карты и фулл-хауса
    deal(&mut players, "player", hand(&[8, 8], "hs"));
    deal(&mut players, "ai2", hand(&[4, 13], "hc"));
    deal(&mut players, "ai3", hand(&[6, 6], "hc"));
    let board = hand(&[2, 3, 6, 8, 8], "dcscd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");
    assert_eq!(result.hand().score(), 7);

    // близко: дамы с валетами, дамы с десятками, короли с дамами
    deal(&mut players, "player", hand(&[11, 11], "hc"));
    deal(&mut players, "ai2", hand(&[10, 5], "hc"));
    deal(&mut players, "ai3", hand(&[13, 4], "hs"));
    let board = hand(&[2, 10, 13, 12, 12], "dcssd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai3");
}

//
// ============= Четыре игрока ============
//
#[test]
fn winner_between_four_players() {
    let mut players = table();
    deal(&mut players, "player", hand(&[9, 9], "hc"));
    deal(&mut players, "ai1", hand(&[11, 11], "hc"));
    deal(&mut players, "ai2", hand(&[10, 5], "hc"));
    deal(&mut players, "ai3", hand(&[13, 4], "hs"));
    let board = hand(&[2, 10, 13, 12, 12], "dcssd");

    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai3");
    assert_eq!(
        result.strength(),
        HandStrength::TwoPair { high: King, low: Queen, kicker: Ten }
    );
}

//
// ============= Каре на столе: решает кикер ============
//
#[test]
fn quads_on_board_kicker_decides() {
    let mut players = table();
    deal(&mut players, "player", hand(&[10, 9], "hc"));
    deal(&mut players, "ai1", hand(&[6, 11], "hc"));
    deal(&mut players, "ai2", hand(&[11, 5], "dc"));
    deal(&mut players, "ai3", hand(&[12, 3], "hs"));
    let board = hand(&[7, 4, 4, 4, 4], "dcshd");

    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai3");
    assert_eq!(result.hand().score(), 7);
    assert_eq!(result.hand().high_hand_cards(), vec![Four, Queen]);
}

//
// ============= Каре и кикер на столе: играет борд ============
//
#[test]
fn quads_and_high_kicker_on_board_is_board_win() {
    let mut players = table();
    deal(&mut players, "player", hand(&[9, 9], "hc"));
    deal(&mut players, "ai1", hand(&[10, 11], "hc"));
    deal(&mut players, "ai2", hand(&[9, 5], "dc"));
    deal(&mut players, "ai3", hand(&[12, 3], "hs"));
    let board = hand(&[13, 14, 14, 14, 14], "dcshd");

    let result = get_winner(&players, &board).unwrap();
    match &result {
        WinnerResult::BoardPlays { owners, hand: h } => {
            assert_eq!(owners, &["ai1", "ai2", "ai3", "player"]);
            assert_eq!(h.strength, HandStrength::FourOfAKind { quads: Ace, kicker: King });
            assert!(h.is_formed_from(&board));
        }
        other => panic!("ожидался BoardPlays, получено {other:?}"),
    }
    assert!(result.is_draw());
}

//
// ============= Каре на столе, одинаковый кикер в руке у двоих ============
//
#[test]
fn quads_on_board_same_hole_kicker_is_true_draw() {
    let mut players = table();
    deal(&mut players, "player", hand(&[9, 9], "hc"));
    deal(&mut players, "ai1", hand(&[8, 2], "hc"));
    deal(&mut players, "ai2", hand(&[9, 5], "dc"));
    deal(&mut players, "ai3", hand(&[4, 3], "hs"));
    let board = hand(&[3, 14, 14, 14, 14], "dcshd");

    let result = get_winner(&players, &board).unwrap();
    match &result {
        WinnerResult::Split(winners) => {
            let owners: Vec<&str> = winners.iter().map(|w| w.owner.as_str()).collect();
            assert_eq!(owners, vec!["ai2", "player"]);
            for w in winners {
                assert_eq!(
                    w.hand.strength,
                    HandStrength::FourOfAKind { quads: Ace, kicker: Nine }
                );
                assert!(!w.hand.is_formed_from(&board));
            }
            // рука ничьей — рука первого по id
            assert_eq!(result.hand(), &winners[0].hand);
        }
        other => panic!("ожидалась ничья, получено {other:?}"),
    }
}

//
// ============= Сет на столе ============
//
#[test]
fn trips_on_board_kickers_decide() {
    let mut players = table();
    deal(&mut players, "player", hand(&[9, 4], "hc"));
    deal(&mut players, "ai1", hand(&[8, 2], "hc"));
    deal(&mut players, "ai2", hand(&[11, 5], "dc"));
    deal(&mut players, "ai3", hand(&[4, 3], "hs"));
    let board = hand(&[7, 14, 14, 14, 10], "dcshd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai2");

    deal(&mut players, "player", hand(&[11, 4], "hc"));
    deal(&mut players, "ai1", hand(&[8, 2], "hc"));
    deal(&mut players, "ai2", hand(&[4, 5], "dc"));
    deal(&mut players, "ai3", hand(&[4, 7], "hs"));
    let board = hand(&[13, 3, 3, 3, 10], "dcshd");
    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "player");
    assert_eq!(
        result.strength(),
        HandStrength::ThreeOfAKind { trips: Three, kickers: [King, Jack] }
    );
}

#[test]
fn trips_and_both_kickers_on_board_is_board_win() {
    let mut players = table();
    deal(&mut players, "player", hand(&[9, 4], "hc"));
    deal(&mut players, "ai1", hand(&[8, 2], "hc"));
    deal(&mut players, "ai2", hand(&[11, 5], "dc"));
    deal(&mut players, "ai3", hand(&[4, 3], "hs"));
    let board = hand(&[12, 14, 14, 14, 13], "dcshd");

    let result = get_winner(&players, &board).unwrap();
    assert!(matches!(result, WinnerResult::BoardPlays { .. }));
    assert_eq!(result.owners().len(), 4);
    assert_eq!(result.hand().high_hand_cards(), vec![Ace, King, Queen]);
}

#[test]
fn same_trips_for_two_players_is_true_draw() {
    let mut players = table();
    deal(&mut players, "player", hand(&[14, 8], "hd"));
    deal(&mut players, "ai1", hand(&[14, 8], "dc"));
    deal(&mut players, "ai2", hand(&[11, 5], "dc"));
    deal(&mut players, "ai3", hand(&[4, 3], "hs"));
    let board = hand(&[7, 14, 14, 5, 3], "dcshd");

    let result = get_winner(&players, &board).unwrap();
    assert!(matches!(result, WinnerResult::Split(_)));
    assert_eq!(result.owners(), vec!["ai1", "player"]);
    assert_eq!(
        result.strength(),
        HandStrength::ThreeOfAKind { trips: Ace, kickers: [Eight, Seven] }
    );

    // Сет двоек с кикерами A-9 у двоих, остальные — пары/две пары.
    deal(&mut players, "player", hand(&[9, 2], "hs"));
    deal(&mut players, "ai1", hand(&[7, 8], "hc"));
    deal(&mut players, "ai2", hand(&[9, 2], "dh"));
    deal(&mut players, "ai3", hand(&[8, 3], "hs"));
    let board = hand(&[7, 2, 2, 5, 14], "dcdhc");

    let result = get_winner(&players, &board).unwrap();
    assert!(matches!(result, WinnerResult::Split(_)));
    assert_eq!(result.owners(), vec!["ai2", "player"]);
}

//
// ============= Сфолдившие игроки не влияют на итог ============
//
#[test]
fn folded_players_are_ignored_even_with_better_cards() {
    let mut players = table();
    deal(&mut players, "player", hand(&[2, 3], "hh"));
    deal(&mut players, "ai1", hand(&[4, 5], "cc"));
    // у ai2 сильнее рука, а дама бубен даже дублирует борд: карты сфолдивших не проверяются
    deal(&mut players, "ai2", hand(&[13, 12], "dd"));
    fold(&mut players, &["ai2", "ai3"]);
    let board = hand(&[12, 11, 10, 14, 9], "dddsc");

    let result = get_winner(&players, &board).unwrap();
    assert!(!result.owners().iter().any(|id| *id == "ai2" || *id == "ai3"));
}

//
// ============= Стрит-флеш, wheel и идемпотентность ============
//
#[test]
fn wheel_loses_to_six_high_straight() {
    let mut players = table();
    fold(&mut players, &["ai1", "ai2"]);
    deal(&mut players, "player", hand(&[14, 9], "hc")); // A-2-3-4-5
    deal(&mut players, "ai3", hand(&[6, 9], "cd")); // 2-3-4-5-6
    let board = hand(&[2, 3, 4, 5, 13], "dsdcs");

    let result = get_winner(&players, &board).unwrap();
    assert_eq!(single_owner(&result), "ai3");
    assert_eq!(result.strength(), HandStrength::Straight { high: Six });
}

#[test]
fn same_input_gives_same_result() {
    let mut players = table();
    deal(&mut players, "player", hand(&[9, 9], "hc"));
    deal(&mut players, "ai1", hand(&[8, 2], "hc"));
    deal(&mut players, "ai2", hand(&[9, 5], "dc"));
    deal(&mut players, "ai3", hand(&[4, 3], "hs"));
    let board = hand(&[3, 14, 14, 14, 14], "dcshd");

    let first = get_winner(&players, &board).unwrap();
    let second = get_winner(&players, &board).unwrap();
    assert_eq!(first, second);

    // Порядок игроков во входе не меняет результат.
    players.reverse();
    let reversed = get_winner(&players, &board).unwrap();
    assert_eq!(first, reversed);
}

#[test]
fn works_with_map_of_players() {
    use std::collections::BTreeMap;

    let mut map = BTreeMap::new();
    map.insert("player".to_string(), PlayerEntry::new("player", hand(&[13, 13], "hc")));
    map.insert("ai1".to_string(), PlayerEntry::new("ai1", hand(&[12, 12], "hc")));
    let board = hand(&[2, 7, 9, 4, 3], "dcssd");

    let result = get_winner(map.values(), &board).unwrap();
    assert_eq!(single_owner(&result), "player");
}
