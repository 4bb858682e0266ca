mod prompt;

use std::io;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uno_engine::{config::GameConfig, stats::SessionStatistics, uno::Uno, DEFAULT_POINTS_TO_WIN};

use crate::prompt::{parse_player_count, PlayerSetup, Prompter};

/// Play Uno between computer players
#[derive(Debug, Parser)]
#[command(name = "uno")]
struct Args {
    /// Seed for shuffling and random choices, picked at random when missing
    #[arg(long)]
    seed: Option<u64>,

    /// Points that win the game
    #[arg(long, default_value_t = DEFAULT_POINTS_TO_WIN)]
    points_to_win: u32,

    /// Number of games to play with the same players
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Number of players, asked for when missing
    #[arg(long, value_parser = parse_player_count)]
    players: Option<usize>,

    /// Skip manual player configuration
    #[arg(long)]
    auto: bool,

    /// Log round and game progress
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let count = match args.players {
        Some(count) => count,
        None => prompter.player_count()?,
    };
    let manual = !args.auto && prompter.confirm("Configure players manually?")?;
    let setups = if manual {
        prompter.player_setups(count)?
    } else {
        PlayerSetup::defaults(count)
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::default().with_points_to_win(args.points_to_win);
    info!(seed, players = count, games = args.games, "starting");

    let mut session = SessionStatistics::new();
    for game in 0..args.games {
        let players = setups
            .iter()
            .enumerate()
            .map(|(id, setup)| setup.to_player(id as u64))
            .collect();
        let mut uno = Uno::with_seed(players, config, seed.wrapping_add(u64::from(game)))?;

        let stats = uno.play_game()?;
        println!("Game {}: {stats}", game + 1);
        session.record(&stats);
    }

    if args.games > 1 {
        println!("{session}");
    }

    Ok(())
}
