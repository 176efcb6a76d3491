//! VÅRKAMP terminal puzzle hunt
//!
//! Plays a puzzle manifest one puzzle at a time, with a running clock and
//! progress saved after every solved puzzle.
//!
//! Usage:
//!   varkamp --manifest assets/data/puzzles.json
//!   varkamp status
//!   varkamp --reset

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use varkamp_cli::{
    Command, DEFAULT_MANIFEST, HELP, default_store_path, parse_line, render_outcome, render_page,
    render_puzzle, render_status,
};
use varkamp_puzzle::Manifest;
use varkamp_session::{Phase, Session, SessionConfig, SessionRecord};
use varkamp_storage::FileStore;
use varkamp_types::SystemClock;

#[derive(Parser, Debug)]
#[command(name = "varkamp")]
#[command(about = "Play the VÅRKAMP puzzle hunt in the terminal")]
struct Args {
    /// Path to the puzzle manifest
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Path to the saved session file
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Discard saved progress before starting
    #[arg(long)]
    reset: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone)]
enum Cmd {
    /// Play (the default)
    Play,
    /// Show progress and elapsed time
    Status,
    /// Show a static page
    Page {
        /// Page key from the manifest
        key: String,
    },
    /// Discard saved progress
    Reset,
}

type TerminalSession = Session<FileStore, SystemClock>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = SessionConfig::default();
    let store_path = args.store.clone().unwrap_or_else(default_store_path);
    let mut store = FileStore::open(&store_path)
        .with_context(|| format!("failed to open session file {}", store_path.display()))?;

    if args.reset {
        SessionRecord::clear(&mut store, &config).context("failed to clear saved session")?;
        info!("Cleared saved session in {}", store_path.display());
    }

    let manifest = Manifest::load(&args.manifest)
        .await
        .context("could not load the puzzles")?;
    let mut session = Session::open(manifest, store, SystemClock, config)?;

    match args.command.unwrap_or(Cmd::Play) {
        Cmd::Play => play(&mut session).await?,
        Cmd::Status => {
            println!(
                "{}",
                render_status(session.phase(), session.progress(), &session.elapsed_time())
            );
        }
        Cmd::Page { key } => println!("{}", render_page(session.static_page(&key)?)),
        Cmd::Reset => {
            session.reset()?;
            println!("Progress discarded.");
        }
    }
    Ok(())
}

async fn play(session: &mut TerminalSession) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if session.phase() == Phase::NotStarted {
        println!("Welcome to VÅRKAMP! Press Enter to start the clock.");
        if lines.next_line().await?.is_none() {
            return Ok(());
        }
        session.start()?;
    }

    loop {
        let progress = match (session.phase(), session.progress()) {
            (Phase::Completed, _) => {
                println!("\nAll puzzles solved in {}!", session.elapsed_time());
                return Ok(());
            }
            (Phase::InProgress(_), Some(progress)) => progress,
            (phase, _) => bail!("unexpected session phase {phase:?}"),
        };
        println!(
            "\n{}",
            render_puzzle(session.current_puzzle()?, progress, &session.elapsed_time())
        );

        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };
            match parse_line(&line) {
                Command::Quit => return Ok(()),
                Command::Time => println!("{}", session.elapsed_time()),
                Command::Help => println!("{HELP}"),
                Command::Hint => match session.revealed_hint() {
                    Some(hint) => println!("Hint: {hint}"),
                    None => println!("No hint yet."),
                },
                Command::Page(key) => match session.static_page(&key) {
                    Ok(page) => println!("{}", render_page(page)),
                    Err(e) => println!("{e}"),
                },
                Command::Answer(input) => {
                    let outcome = session.submit_answer(&input)?;
                    println!("{}", render_outcome(&outcome, session.revealed_hint()));
                    if outcome.evaluation.is_accepted() {
                        break;
                    }
                }
            }
        }
    }
}
