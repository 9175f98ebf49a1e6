//! Cambio Tracker entry point
//!
//! Native builds get a small command-line front end over a JSON data file.
//! The browser build is driven from JavaScript through `cambio_tracker::web`.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand};

    use cambio_tracker::persistence::FileStorage;
    use cambio_tracker::{LedgerError, Settings, Tracker, parse_score};

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Score history file
        #[arg(short, long, env = "CAMBIO_DATA", default_value = "cambio_scores.json")]
        data: PathBuf,

        /// Optional settings file (player names, anger thresholds)
        #[arg(short, long, env = "CAMBIO_SETTINGS")]
        settings: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Record a round in the current session
        Add {
            #[arg(allow_negative_numbers = true, value_parser = score_arg)]
            mike: i64,
            #[arg(allow_negative_numbers = true, value_parser = score_arg)]
            preeta: i64,
        },
        /// Change the scores of round N (1-based)
        Edit {
            round: usize,
            #[arg(allow_negative_numbers = true, value_parser = score_arg)]
            mike: i64,
            #[arg(allow_negative_numbers = true, value_parser = score_arg)]
            preeta: i64,
        },
        /// Delete round N (1-based) and recompute all totals
        Delete { round: usize },
        /// Start a new session
        NewSession,
        /// Delete every round
        Clear {
            /// Required, this cannot be undone
            #[arg(long)]
            yes: bool,
        },
        /// Show totals, deltas and anger levels
        Status,
        /// List rounds, newest first
        History {
            #[arg(short, long)]
            limit: Option<usize>,
        },
        /// Write the history to cambio_scores_<date>.csv
        Export {
            #[arg(short, long, default_value = ".")]
            out: PathBuf,
        },
        /// Replace the history with a CSV file's rounds
        Import { file: PathBuf },
    }

    fn score_arg(s: &str) -> Result<i64, LedgerError> {
        parse_score(s)
    }

    fn round_index(round: usize) -> anyhow::Result<usize> {
        match round.checked_sub(1) {
            Some(index) => Ok(index),
            None => bail!("round numbers start at 1"),
        }
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();

        let settings = match &args.settings {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        let mut tracker = Tracker::open(FileStorage::new(&args.data), settings)
            .with_context(|| format!("failed to load scores from {}", args.data.display()))?;

        match args.command {
            Command::Add { mike, preeta } => {
                let round = tracker.add_round(mike, preeta)?;
                println!(
                    "Round {} (session {}): {} {} / {} {}",
                    tracker.ledger().rounds().len(),
                    round.session,
                    tracker.ledger().settings().mike_name,
                    round.mike_session_total,
                    tracker.ledger().settings().preeta_name,
                    round.preeta_session_total
                );
            }
            Command::Edit {
                round,
                mike,
                preeta,
            } => {
                tracker.edit_round(round_index(round)?, mike, preeta)?;
                println!("Round {round} updated, totals recalculated");
            }
            Command::Delete { round } => {
                tracker.delete_round(round_index(round)?)?;
                println!(
                    "Round {round} deleted, current session is now {}",
                    tracker.ledger().current_session()
                );
            }
            Command::NewSession => {
                tracker.start_new_session()?;
                println!("Started session {}", tracker.ledger().current_session());
            }
            Command::Clear { yes } => {
                if !yes {
                    bail!("refusing to clear all data without --yes");
                }
                tracker.clear_all_data()?;
                println!("All data cleared");
            }
            Command::Status => print_status(&tracker),
            Command::History { limit } => print_history(&tracker, limit),
            Command::Export { out } => {
                let Some(export) = tracker.export_csv() else {
                    bail!("no data to export");
                };
                let path = out.join(&export.filename);
                fs::write(&path, export.content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Exported to {}", path.display());
            }
            Command::Import { file } => {
                let content = fs::read_to_string(&file)
                    .with_context(|| format!("failed to read {}", file.display()))?;
                let count = tracker
                    .import_csv(&content)
                    .with_context(|| format!("error importing {}", file.display()))?;
                println!("Imported {count} rounds");
            }
        }

        Ok(())
    }

    fn print_status(tracker: &Tracker<FileStorage>) {
        let board = tracker.scoreboard();
        let settings = tracker.ledger().settings();
        println!("Session {}", board.current_session);
        println!(
            "  {:<10} session {:>5}  overall {:>6}  {}",
            settings.mike_name,
            board.session_totals.mike_session_total,
            board.overall_totals.mike_overall_total,
            board.anger_levels.mike_anger.as_str()
        );
        println!(
            "  {:<10} session {:>5}  overall {:>6}  {}",
            settings.preeta_name,
            board.session_totals.preeta_session_total,
            board.overall_totals.preeta_overall_total,
            board.anger_levels.preeta_anger.as_str()
        );
        println!("Session delta: {}", board.session_delta_text);
        println!("Total delta:   {}", board.overall_delta_text);
    }

    fn print_history(tracker: &Tracker<FileStorage>, limit: Option<usize>) {
        let history = tracker.history();
        if history.is_empty() {
            println!("No rounds yet");
            return;
        }

        let settings = tracker.ledger().settings();
        println!(
            "{:>4} {:>4} | {:^20} | {:^20}",
            "#", "Ses", settings.mike_name, settings.preeta_name
        );
        println!(
            "{:>4} {:>4} | {:>6} {:>6} {:>6} | {:>6} {:>6} {:>6}",
            "", "", "Rnd", "Ses", "Tot", "Rnd", "Ses", "Tot"
        );
        for entry in history.iter().take(limit.unwrap_or(usize::MAX)) {
            let r = &entry.round;
            println!(
                "{:>4} {:>4} | {:>6} {:>6} {:>6} | {:>6} {:>6} {:>6}",
                entry.number,
                r.session,
                r.mike_score,
                r.mike_session_total,
                r.mike_overall_total,
                r.preeta_score,
                r.preeta_session_total,
                r.preeta_overall_total
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Cambio Tracker (native) starting...");
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is cambio_tracker::web::start, this is just to satisfy the compiler
}
