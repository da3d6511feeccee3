use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info, warn};

use codenames_solver::core::{Board, Card, Difficulty, GameSnapshot, Team};
use codenames_solver::index::loader::{load_candidates, load_embeddings};
use codenames_solver::logging::init_logging;
use codenames_solver::solver::{ClueConfig, ClueSelector};
use codenames_solver::turn::{TurnEnd, TurnSimulator, TurnStats};

/// Codenames clue engine and opponent simulator.
#[derive(Debug, Parser)]
#[command(name = "codenames", author, version, about = "Codenames decision engine")]
struct Cli {
    /// Diagnostic log level (overridden by RUST_LOG).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick the best clue for the ally team.
    Clue(ClueArgs),
    /// Simulate one opponent turn.
    Turn(TurnArgs),
    /// Run many opponent turns at every difficulty and summarize them.
    Simulate(SimulateArgs),
}

#[derive(Debug, Args)]
struct ClueArgs {
    /// Game snapshot JSON.
    #[arg(long, value_name = "FILE")]
    snapshot: PathBuf,

    /// Candidate index JSON (word -> clue list).
    #[arg(long, value_name = "FILE")]
    candidates: PathBuf,

    /// Embedding text file (word followed by components, one per line).
    #[arg(long, value_name = "FILE")]
    embeddings: PathBuf,

    /// Similarity threshold in [0, 1).
    #[arg(long, default_value_t = ClueConfig::default().threshold)]
    threshold: f32,

    /// Monte-Carlo trials per contested candidate.
    #[arg(long, default_value_t = ClueConfig::default().trials)]
    trials: usize,

    /// RNG seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the snapshot with the clue recorded instead of the clue.
    #[arg(long)]
    apply: bool,

    /// Print the board to stderr before solving.
    #[arg(long)]
    show_board: bool,
}

#[derive(Debug, Args)]
struct TurnArgs {
    /// Game snapshot JSON.
    #[arg(long, value_name = "FILE")]
    snapshot: PathBuf,

    /// RNG seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the snapshot with the revealed cards applied instead of the turn.
    #[arg(long)]
    apply: bool,
}

#[derive(Debug, Args)]
struct SimulateArgs {
    /// Game snapshot JSON.
    #[arg(long, value_name = "FILE")]
    snapshot: PathBuf,

    /// Turns to simulate per difficulty.
    #[arg(long, value_name = "N", default_value_t = 10_000)]
    games: u64,

    /// RNG seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Command::Clue(args) => run_clue(&args),
        Command::Turn(args) => run_turn(&args),
        Command::Simulate(args) => run_simulate(&args),
    }
}

fn run_clue(args: &ClueArgs) -> Result<()> {
    let mut snapshot = read_snapshot(&args.snapshot)?;
    if args.show_board {
        eprintln!("{}", render_board(&snapshot.board));
    }

    let candidates = load_candidates(&args.candidates)?;
    let embeddings = load_embeddings(&args.embeddings)?;
    info!(
        candidates = candidates.len(),
        embeddings = embeddings.len(),
        "artifacts loaded"
    );

    let config = ClueConfig::new(args.threshold, args.trials);
    let selector = ClueSelector::new(&candidates, &embeddings, config)?;
    let mut rng = make_rng(args.seed);
    let result = selector
        .select(&snapshot.board, &snapshot.invalid_guesses, &mut rng)
        .context("selecting clue")?;

    if args.apply {
        snapshot.record_clue(&result.clue);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn run_turn(args: &TurnArgs) -> Result<()> {
    let mut snapshot = read_snapshot(&args.snapshot)?;
    let simulator = TurnSimulator::from_snapshot(&snapshot).with_context(|| {
        format!("reading difficulty from {}", args.snapshot.display())
    })?;
    let mut rng = make_rng(args.seed);
    let result = simulator.simulate(&snapshot.board, &mut rng);

    if args.apply {
        for &id in &result.sequence {
            snapshot.board.reveal(id);
        }
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn run_simulate(args: &SimulateArgs) -> Result<()> {
    let snapshot = read_snapshot(&args.snapshot)?;
    let board = &snapshot.board;
    let mut rng = make_rng(args.seed);

    let progress = ProgressBar::new(args.games * Difficulty::ALL.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(concat!(
            "{spinner:.green} [{elapsed_precise}] ",
            "[{wide_bar:.cyan/blue}] {pos}/{len} turns ({eta})"
        ))?
        .progress_chars("=> "),
    );

    let mut summary = Vec::with_capacity(Difficulty::ALL.len());
    for difficulty in Difficulty::ALL {
        let simulator = TurnSimulator::new(difficulty);
        let mut stats = TurnStats::new();
        for _ in 0..args.games {
            stats.record(&simulator.simulate(board, &mut rng), board);
            progress.inc(1);
        }
        summary.push((difficulty, stats));
    }
    progress.finish_and_clear();

    println!(
        "{:<8} {:>9} {:>9} {:>9} {:>8} {:>8} {:>8} {:>10}",
        "level", "opponent", "ally", "neutral", "length", "ally%", "stop%", "exhausted%"
    );
    for (difficulty, stats) in &summary {
        println!(
            "{:<8} {:>9.3} {:>9.3} {:>9.3} {:>8.3} {:>7.1}% {:>7.1}% {:>9.1}%",
            difficulty.name(),
            stats.mean_reveals(Team::Opponent),
            stats.mean_reveals(Team::Ally),
            stats.mean_reveals(Team::Neutral),
            stats.mean_length(),
            stats.end_rate(TurnEnd::AllyRevealed) * 100.0,
            stats.end_rate(TurnEnd::Stopped) * 100.0,
            stats.end_rate(TurnEnd::Exhausted) * 100.0,
        );
    }
    Ok(())
}

fn read_snapshot(path: &Path) -> Result<GameSnapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot at {}", path.display()))?;
    let snapshot: GameSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("parsing snapshot at {}", path.display()))?;

    if !snapshot.board.is_standard_composition() {
        warn!(
            cards = snapshot.board.cards().len(),
            "board does not have the standard 9/8/7/1 composition"
        );
    }
    Ok(snapshot)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn render_board(board: &Board) -> String {
    board
        .cards()
        .chunks(5)
        .map(|row| {
            row.iter()
                .map(|card| format!("{:<14}", card_label(card)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn card_label(card: &Card) -> ColoredString {
    let label = format!("{}:{}", card.id, card.name);
    let colored = match card.team {
        Team::Ally => label.blue(),
        Team::Opponent => label.red(),
        Team::Neutral => label.yellow(),
        Team::Forbidden => label.black().on_white(),
    };
    if card.revealed {
        colored.dimmed().strikethrough()
    } else {
        colored.bold()
    }
}
