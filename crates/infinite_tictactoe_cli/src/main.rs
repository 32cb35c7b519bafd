//! Infinite Tic-Tac-Toe - terminal front-end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use infinite_tictactoe::{Board, Mark, Position, Scoreboard, Strategy};
use infinite_tictactoe_cli::cli::{Cli, Command, PlayArgs};
use infinite_tictactoe_cli::players::{lineup, stdin_lines};
use infinite_tictactoe_cli::{GameConfig, GameEvent, Orchestrator, ScoreFile, render};
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play(args) => run_play(config, args).await,
        Command::Suggest {
            board,
            mark,
            strategy,
            seed,
        } => run_suggest(board, mark, strategy, seed),
        Command::Scores { reset } => run_scores(&config, reset),
    }
}

/// Plays one or more games at the terminal.
#[instrument(skip_all)]
async fn run_play(config: GameConfig, args: PlayArgs) -> Result<()> {
    let config = args.apply_to(config);
    config.validate()?;
    info!(?config, "Starting session");

    let score_file = config.scores_path().as_deref().map(ScoreFile::new);
    let mut scoreboard = match &score_file {
        Some(file) => file.load()?,
        None => Scoreboard::new(),
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render::run(event_rx, std::io::stdout()));

    let (player_x, player_o) = lineup(&config, stdin_lines());
    let names = (player_x.name().to_string(), player_o.name().to_string());
    let mut orchestrator =
        Orchestrator::new(*config.variant(), player_x, player_o, event_tx.clone());

    for round in 1..=*config.rounds() {
        event_tx.send(GameEvent::Notice(render::banner(
            round,
            *config.rounds(),
            *config.variant(),
            &names.0,
            &names.1,
        )))?;

        let outcome = orchestrator.run().await?;
        if !outcome.is_over() {
            break;
        }
        scoreboard.record(&outcome);
        event_tx.send(GameEvent::Notice(scoreboard.to_string()))?;
        orchestrator.restart();
    }

    drop(orchestrator);
    drop(event_tx);
    renderer.await??;

    if let Some(file) = &score_file {
        file.save(&scoreboard)?;
    }
    info!(%scoreboard, "Session finished");
    Ok(())
}

/// Prints the square `strategy` would play for `mark` on `board`.
#[instrument]
fn run_suggest(board: Board, mark: Mark, strategy: Strategy, seed: Option<u64>) -> Result<()> {
    let outcome = infinite_tictactoe::check_outcome(&board);
    if outcome.is_over() {
        println!("The game on this board is already over: {:?}", outcome);
        return Ok(());
    }

    let mut selector = strategy.selector(seed);
    let index = selector.select_move(&board, mark, mark.opponent())?;
    let label = Position::from_index(index)
        .map(|position| position.label())
        .unwrap_or("?");
    println!("{}", render::render_board(&board, None));
    println!("{} ({}) plays {}: {}", mark, strategy, index, label);
    Ok(())
}

/// Shows or clears the saved scores.
#[instrument(skip(config))]
fn run_scores(config: &GameConfig, reset: bool) -> Result<()> {
    let path: &Path = config
        .scores_path()
        .as_deref()
        .context("No scores_path configured; set it in the config file")?;
    let file = ScoreFile::new(path);

    let mut scoreboard = file.load()?;
    if reset {
        scoreboard.reset();
        file.save(&scoreboard)?;
        println!("Scores cleared.");
    }
    println!("{}", scoreboard);
    Ok(())
}
