use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use hotel_app::app_loop::{AppState, Flow};
use hotel_app::run_state_file::{RunStateFile, default_journal_path};
use hotel_app::seed::parse_launch_args;
use hotel_app::{format_seed, format_snapshot_hash};
use hotel_core::seed::runtime_seed;
use hotel_core::{GameSession, HotelConfig, RunJournal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HOTEL_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let options = parse_launch_args(&args, runtime_seed()).map_err(|message| eyre!(message))?;
    let config = match &options.config_path {
        Some(path) => HotelConfig::load(path)?,
        None => HotelConfig::default(),
    };
    let config_hash = config.fingerprint();

    let mut session = GameSession::initialize(config, options.seed.value());
    let mut journal = RunJournal::new(session.seed(), config_hash);
    let mut app = AppState::new();
    let state_path = RunStateFile::get_default_path();
    let journal_path = default_journal_path();

    info!(target: "hotel::app", seed = session.seed(), source = ?options.seed, "app.started");
    println!(
        "Welcome to the hotel. Night seed {}. Type 'help' for commands.",
        format_seed(session.seed())
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let flow = app.handle_line(&mut session, &line);

        if app.restarted {
            journal = RunJournal::new(session.seed(), config_hash);
        }
        for payload in app.accepted_inputs.drain(..) {
            journal.append(payload);
        }
        for text in &app.output {
            writeln!(stdout, "{text}")?;
        }
        stdout.flush()?;

        persist(&session, &journal, state_path.as_ref(), journal_path.as_ref());
        if flow == Flow::Quit {
            break;
        }
    }

    println!(
        "Goodbye. Seed {} ended with snapshot {}.",
        format_seed(session.seed()),
        format_snapshot_hash(session.snapshot_hash())
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Saving is best effort; a read-only data dir must not end the run.
fn persist(
    session: &GameSession,
    journal: &RunJournal,
    state_path: Option<&PathBuf>,
    journal_path: Option<&PathBuf>,
) {
    if let Some(path) = state_path
        && let Err(error) = RunStateFile::from_session(session).write_atomic(path)
    {
        warn!(target: "hotel::app", %error, path = %path.display(), "app.run_state.write_failed");
    }
    if let Some(path) = journal_path
        && let Err(error) = journal.save(path)
    {
        warn!(target: "hotel::app", %error, path = %path.display(), "app.journal.write_failed");
    }
}
