//! Command-line interface for infinite_tictactoe.

use crate::config::{GameConfig, GameMode};
use clap::{Args, Parser, Subcommand};
use infinite_tictactoe::{Board, Mark, Strategy, Variant};
use std::path::PathBuf;

/// Infinite tic-tac-toe: only the newest nine marks stay on the board
#[derive(Parser, Debug)]
#[command(name = "infinite_tictactoe")]
#[command(about = "Tic-tac-toe where the oldest mark fades away", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Print the square a strategy picks for a board
    Suggest {
        /// Board as nine cells, e.g. "XX.OO...." (X, O, or . for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark to move
        #[arg(short, long, default_value = "O")]
        mark: Mark,

        /// Strategy to ask (optimal, heuristic, random)
        #[arg(short, long, default_value = "optimal")]
        strategy: Strategy,

        /// Seed for the random strategies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the saved scores
    Scores {
        /// Clear the saved scores
        #[arg(long)]
        reset: bool,
    },
}

/// Overrides for the config file when playing
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// human-vs-ai or human-vs-human
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// AI strategy: optimal, heuristic, random (or hard, medium, easy)
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Mark the AI plays
    #[arg(long)]
    pub ai_mark: Option<Mark>,

    /// Pause before each AI move, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// infinite or classic
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Seed for the random strategies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to keep the running score
    #[arg(long)]
    pub scores_path: Option<PathBuf>,

    /// Games to play
    #[arg(short, long)]
    pub rounds: Option<u32>,
}

impl PlayArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if let Some(mark) = self.ai_mark {
            config = config.with_ai_mark(mark);
        }
        if let Some(delay) = self.ai_delay_ms {
            config = config.with_ai_delay_ms(delay);
        }
        if let Some(variant) = self.variant {
            config = config.with_variant(variant);
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }
        if self.scores_path.is_some() {
            config = config.with_scores_path(self.scores_path.clone());
        }
        if let Some(rounds) = self.rounds {
            config = config.with_rounds(rounds);
        }
        config
    }
}
