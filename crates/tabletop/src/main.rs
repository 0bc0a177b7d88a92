//! Tabletop - unified CLI
//!
//! Plays games between configured seats or benchmarks the search.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;
use tabletop::{
    ArenaConfig, BenchConfig, Driver, GameEvent, MoveSubmitter, Roster, run_benchmark,
};
use tabletop_games::GameKind;
use tabletop_search::SearchAlgorithm;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            game,
            depth,
            algorithm,
        } => run_play(config, game, depth, algorithm).await,
        Command::Bench {
            game,
            algorithm,
            depths,
            runs,
            budget_ms,
            format,
        } => run_bench(game, algorithm, depths, runs, budget_ms, format).await,
    }
}

/// Run one game, feeding human seats from stdin
#[instrument(skip_all)]
async fn run_play(
    config_path: Option<PathBuf>,
    game: Option<GameKind>,
    depth: Option<u32>,
    algorithm: Option<SearchAlgorithm>,
) -> Result<()> {
    let mut config = ArenaConfig::load_or_quick(config_path.as_deref(), game)?;
    if let Some(depth) = depth {
        config = config.with_depth(depth);
    }
    if let Some(algorithm) = algorithm {
        config = config.with_algorithm(algorithm);
    }

    let Roster {
        players,
        submitters,
    } = config.build_players()?;
    let humans: Vec<(String, MoveSubmitter)> = config
        .players()
        .iter()
        .zip(submitters)
        .filter_map(|(seat, submitter)| submitter.map(|s| (seat.name().clone(), s)))
        .collect();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut driver = Driver::new(*config.game(), players, event_tx)?;
    println!("{}\n", driver.game());

    let console = tokio::spawn(console(event_rx, humans));
    let state = driver.run().await?;
    drop(driver);
    console.await?;

    info!(%state, "Game finished");
    Ok(())
}

/// Prints driver events and routes stdin lines to the human whose turn it is.
async fn console(
    mut events: mpsc::UnboundedReceiver<GameEvent>,
    mut humans: Vec<(String, MoveSubmitter)>,
) {
    let (line_tx, mut lines) = mpsc::unbounded_channel();
    if !humans.is_empty() {
        // Detached reader thread; it dies with the process.
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        });
    }

    let mut to_move: Option<String> = None;
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => {
                    if let GameEvent::Thinking { player } = &event {
                        to_move = Some(player.clone());
                    }
                    render(&event, &humans);
                }
                None => break,
            },
            line = lines.recv(), if !humans.is_empty() => match line {
                Some(line) => submit_line(&line, to_move.as_deref(), &humans),
                None => {
                    warn!("Stdin closed");
                    humans.clear();
                }
            },
        }
    }
}

fn submit_line(line: &str, to_move: Option<&str>, humans: &[(String, MoveSubmitter)]) {
    let Some((name, submitter)) = humans
        .iter()
        .find(|(name, _)| Some(name.as_str()) == to_move)
    else {
        println!("Not your turn");
        return;
    };
    match line.trim().parse::<usize>() {
        Ok(index) => {
            submitter.submit(index);
        }
        Err(_) => println!("{name}, enter a cell index"),
    }
}

fn render(event: &GameEvent, humans: &[(String, MoveSubmitter)]) {
    match event {
        GameEvent::Thinking { player } => {
            if humans.iter().any(|(name, _)| name == player) {
                println!("{player}, your move:");
            }
        }
        GameEvent::MoveMade {
            player,
            index,
            board,
        } => println!("{player} played {index}\n{board}\n"),
        GameEvent::Passed { player } => println!("{player} has no move and passes"),
        GameEvent::GameOver { state, winner } => match winner {
            Some(winner) => println!("Game over: {winner} wins ({state})"),
            None => println!("Game over: {state}"),
        },
    }
}

/// Run the search benchmark
#[instrument]
async fn run_bench(
    game: GameKind,
    algorithm: SearchAlgorithm,
    depths: Vec<u32>,
    runs: u32,
    budget_ms: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let mut config = BenchConfig::default()
        .with_game(game)
        .with_algorithm(algorithm)
        .with_depths(depths)
        .with_runs(runs);
    if let Some(ms) = budget_ms {
        config = config.with_time_budget(Duration::from_millis(ms));
    }

    let report = tokio::task::spawn_blocking(move || run_benchmark(&config)).await??;
    match format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
