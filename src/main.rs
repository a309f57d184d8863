//! Wordle CLI
//!
//! Play Wordle in a TUI (default) or in plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_cli::{
    commands::{check_guess, run_simple},
    config::{GameConfig, WordlistSource},
    core::Scoring,
    game::Statistics,
    interactive::{self, App, run_tui},
    output::print_evaluation,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list: 'embedded' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Duplicate-letter scoring: containment (default) or standard
    #[arg(short, long, global = true, default_value = "containment")]
    scoring: String,

    /// Play against this answer instead of a random one
    #[arg(long, global = true)]
    answer: Option<String>,

    /// Seed for reproducible random answers
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable coloured output (also honours NO_COLOR)
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Evaluate one guess against an answer and print the feedback
    Check {
        /// The secret answer
        answer: String,

        /// The guess to evaluate
        guess: String,
    },
}

fn init_logging(level: &str, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => registry
            .with(fmt::layer().with_writer(interactive::stderr_log_target))
            .init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.log_file.as_ref())?;

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let config = GameConfig {
        scoring: Scoring::from_name(&cli.scoring),
        wordlist: WordlistSource::from_arg(&cli.wordlist),
        answer: cli.answer,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { answer, guess } => run_check_command(&answer, &guess, config.scoring),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let dictionary = config.dictionary()?;
    let answers = config.answer_provider(&dictionary)?;
    tracing::info!(
        answers = dictionary.answers().len(),
        allowed = dictionary.allowed_count(),
        "starting tui"
    );

    let app = App::new(&dictionary, answers, config.scoring)?;
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let dictionary = config.dictionary()?;
    let mut answers = config.answer_provider(&dictionary)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let stats = run_simple(
        &dictionary,
        answers.as_mut(),
        config.scoring,
        &mut input,
        &mut out,
    )?;
    print_farewell(&stats);
    Ok(())
}

fn run_check_command(answer: &str, guess: &str, scoring: Scoring) -> Result<()> {
    let result = check_guess(answer, guess, scoring)?;
    print_evaluation(&mut io::stdout(), &result)?;
    Ok(())
}

fn print_farewell(stats: &Statistics) {
    if stats.total_games > 0 {
        println!(
            "\nPlayed {} | Won {} | Win rate {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        );
    }
    println!("{}", "\n👋 Thanks for playing!\n".bright_cyan());
}
