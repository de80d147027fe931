use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use poker_showdown::api::TableInputDto;
use poker_showdown::engine::get_winner;
use poker_showdown::eval::HandCategory;
use poker_showdown::infra::{
    map_table_from_dto, map_winner_to_dto, run_stress, DeterministicRng, StressConfig, StressStats,
    SystemRng,
};

#[derive(Debug, Parser)]
#[clap(about = "Texas Hold'em showdown: лучшая рука и победитель")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Определить победителя для стола из JSON-файла.
    Eval {
        /// Файл со столом: {"players": [...], "board": [...]}.
        file: PathBuf,
    },
    /// Стресс-прогон: раздать и вскрыть N столов.
    Stress {
        /// Количество раздач (по умолчанию STRESS_TEST_MULTIPLIER).
        #[clap(long, short)]
        rounds: Option<u64>,
        /// Seed для воспроизводимой раздачи (по умолчанию POKER_STRESS_SEED).
        #[clap(long, short)]
        seed: Option<u64>,
        /// Игроков за столом (по умолчанию POKER_STRESS_PLAYERS или 4).
        #[clap(long, short)]
        players: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Eval { file } => eval_file(&file),
        Command::Stress {
            rounds,
            seed,
            players,
        } => stress(rounds, seed, players),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn eval_file(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(file)?;
    let input: TableInputDto = serde_json::from_str(&text)?;
    let (players, board) = map_table_from_dto(&input)?;

    let result = get_winner(&players, &board)?;
    info!(
        "{}: {:?}",
        result.strength().describe(),
        result.owners()
    );

    println!("{}", serde_json::to_string_pretty(&map_winner_to_dto(&result))?);
    Ok(())
}

fn stress(
    rounds: Option<u64>,
    seed: Option<u64>,
    players: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = StressConfig::from_env()?;
    if let Some(r) = rounds {
        cfg.rounds = r;
    }
    if seed.is_some() {
        cfg.seed = seed;
    }
    if let Some(p) = players {
        cfg.players = p;
    }
    cfg.validate()?;

    info!(
        "stress: {} раздач, {} игроков, seed={:?}",
        cfg.rounds, cfg.players, cfg.seed
    );

    let stats = match cfg.seed {
        Some(seed) => run_stress(&mut DeterministicRng::from_seed(seed), cfg.players, cfg.rounds)?,
        None => run_stress(&mut SystemRng, cfg.players, cfg.rounds)?,
    };

    print_summary(&stats);
    Ok(())
}

fn print_summary(stats: &StressStats) {
    println!("=========== SHOWDOWN STRESS SUMMARY ===========");
    println!("Раздач:               {}", stats.rounds);
    println!("Один победитель:      {}", stats.single_winners);
    println!("Настоящая ничья:      {}", stats.true_draws);
    println!("Играет борд:          {}", stats.board_plays);
    println!();
    for category in HandCategory::ALL.iter().rev() {
        println!("{:<20} {}", category.name(), stats.count(*category));
    }
    println!("===============================================");
}
