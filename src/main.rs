//! Headless runner: load a save, advance it, write it back.
//!
//! Usage: `life_engine [PATH] [GENERATIONS]`
//!
//! A `.txt` path is treated as an `(x, y)` cell list on the unbounded
//! plane; anything else as a JSON session file. Missing or unreadable
//! saves start from an empty generation.

use life_engine::persistence::{Result, cell_list};
use life_engine::{Generation, Session, SessionFile, SparseCellSet};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_PATH: &str = "config.ini";
const DEFAULT_GENERATIONS: u64 = 1;

fn advance<G: Generation>(session: Session<G>, generations: u64) -> Session<G> {
    let session = (0..generations).fold(session, |session, _| session.step());
    log::info!(
        "step {}: population {}",
        session.steps,
        session.generation.population()
    );
    session
}

fn run_session_file(path: &Path, generations: u64) -> Result<()> {
    let (session, view) = SessionFile::load_or_default(path).into_session()?;
    let session = advance(session, generations);
    SessionFile::from_session(&session, &view).save(path)
}

fn run_cell_list(path: &Path, generations: u64) -> Result<()> {
    let session: Session<SparseCellSet> = Session::new(cell_list::load_or_empty(path));
    let session = advance(session, generations);
    cell_list::save(path, &session.generation)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_PATH.to_owned()));
    let generations = match args.next().map(|arg| arg.parse::<u64>()) {
        None => DEFAULT_GENERATIONS,
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            log::error!("invalid generation count: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = if path.extension().is_some_and(|ext| ext == "txt") {
        run_cell_list(&path, generations)
    } else {
        run_session_file(&path, generations)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
