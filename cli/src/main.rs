//! World Clock CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`worldclock_engine`] (application state) and
//! [`worldclock_tui`] (rendering), providing RAII-based terminal management
//! with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Two timers drive the loop:
//!
//! 1. Clock tick (1s): sample the system clock and re-project every card
//! 2. Frame tick (16ms): drain the input queue, then render
//!
//! Usage: `worldclock [QUERY...]`. Arguments are joined with spaces and become
//! the initial search query, overriding `initial_query` from the config file.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    env,
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tokio::time::{MissedTickBehavior, interval};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use worldclock_config::{WorldClockConfig, config_dir};
use worldclock_core::{Clock, SystemClock, locations};
use worldclock_engine::App;
use worldclock_tui::{InputPump, draw, handle_events};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "worldclock.log";
const FALLBACK_DIR: &str = ".worldclock";

const CLOCK_PERIOD: Duration = Duration::from_secs(1);
const FRAME_DURATION: Duration = Duration::from_millis(16);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than write over the alternate screen.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.worldclock/logs/worldclock.log
    if let Some(dir) = config_dir() {
        candidates.push(dir.join(LOG_DIR).join(LOG_FILE));
    }

    // Fallback: ./.worldclock/logs/worldclock.log
    candidates.push(PathBuf::from(FALLBACK_DIR).join(LOG_DIR).join(LOG_FILE));

    candidates
}

/// Command-line words take precedence over the configured query.
///
/// Non-UTF-8 arguments are decoded lossily.
fn initial_query<I>(args: I, config: Option<&WorldClockConfig>) -> String
where
    I: IntoIterator<Item = OsString>,
{
    let words: Vec<String> = args
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if !words.is_empty() {
        return words.join(" ");
    }
    config
        .and_then(WorldClockConfig::initial_query)
        .unwrap_or_default()
        .to_string()
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, bracketed paste and the alternate screen; drop restores
/// all three even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // A broken config file is logged by the loader; fall back to defaults.
    let config = WorldClockConfig::load().ok().flatten();
    let options = config
        .as_ref()
        .map(WorldClockConfig::ui_options)
        .unwrap_or_default();
    let query = initial_query(env::args_os().skip(1), config.as_ref());

    let clock = SystemClock;
    let mut app = App::with_query(locations(), clock.now(), options, &query);
    tracing::info!(query = %query, matches = app.match_count(), "Starting world clock");

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app, &clock).await
    };

    if let Err(err) = result {
        tracing::error!("Exiting on error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

async fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App, clock: &C) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    C: Clock,
{
    let mut input = InputPump::new();
    let mut seconds = interval(CLOCK_PERIOD);
    seconds.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frames = interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        tokio::select! {
            _ = seconds.tick() => {
                app.tick(clock.now());
            }
            _ = frames.tick() => {
                // Non-blocking input (drain queue only)
                match handle_events(app, &mut input) {
                    Ok(true) => break Ok(()),
                    Ok(false) => {}
                    Err(e) => break Err(e),
                }

                if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
                    break Err(e.into());
                }
            }
        }
    };

    input.shutdown().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn config_with_query(query: &str) -> WorldClockConfig {
        toml::from_str(&format!("[app]\ninitial_query = {query:?}\n")).unwrap()
    }

    #[test]
    fn args_are_joined_with_spaces() {
        assert_eq!(initial_query(words(&["new", "york"]), None), "new york");
    }

    #[test]
    fn args_override_config() {
        let config = config_with_query("asia");
        assert_eq!(initial_query(words(&["tokyo"]), Some(&config)), "tokyo");
    }

    #[test]
    fn config_query_used_without_args() {
        let config = config_with_query("asia");
        assert_eq!(initial_query(Vec::new(), Some(&config)), "asia");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_args_are_decoded_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![OsString::from("s"), OsString::from_vec(vec![b'o', 0xff])];
        assert_eq!(initial_query(args, None), "s o\u{fffd}");
    }

    #[test]
    fn default_query_is_empty() {
        assert_eq!(initial_query(Vec::new(), None), "");
    }

    #[test]
    fn log_candidates_end_with_local_fallback() {
        let candidates = log_file_candidates();
        let fallback = PathBuf::from(".worldclock").join("logs").join("worldclock.log");
        assert_eq!(candidates.last(), Some(&fallback));
    }
}
