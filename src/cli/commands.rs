use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::config::PickerConfig;
use crate::indexer::{HistoryStats, build_corpus, build_corpus_with_raw};
use crate::matcher::{annotate, rank};
use crate::session::MAX_VISIBLE_RESULTS;
use crate::tui::run_interactive;
use crate::utils::{format_path_with_tilde, get_history_path, init_logging};

#[derive(Parser)]
#[command(name = "history-picker")]
#[command(version = "0.1.0")]
#[command(about = "Interactively search shell history and pick a command", long_about = None)]
pub struct Cli {
    /// History file to read [default: $HISTFILE, then ~/.bash_history]
    #[arg(long, global = true, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the ranked matches for a query, best first
    Query {
        /// Text to search for
        query: String,

        /// Maximum number of matches to print
        #[arg(short = 'n', long, default_value_t = MAX_VISIBLE_RESULTS)]
        limit: usize,

        /// Wrap matched characters in highlight markers
        #[arg(long)]
        highlight: bool,
    },
    /// Show statistics about the history
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the whole run so buffered log lines get flushed
    let _log_guard = if cli.no_log {
        None
    } else {
        match init_logging() {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: logging disabled: {:#}", e);
                None
            }
        }
    };

    let history_path = get_history_path(cli.history_file.as_deref())?;

    match &cli.command {
        None => pick(&history_path)?,
        Some(Commands::Query { query, limit, highlight }) => {
            print_matches(&history_path, query, *limit, *highlight)?;
        }
        Some(Commands::Stats { json }) => {
            show_stats(&history_path, *json)?;
        }
    }

    Ok(())
}

fn pick(history_path: &Path) -> Result<()> {
    let corpus = build_corpus(history_path)?;
    if corpus.is_empty() {
        bail!("No history found in {}", history_path.display());
    }

    if let Some(command) = run_interactive(corpus, PickerConfig::default())? {
        info!("printing selected command");
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", command)?;
        stdout.flush()?;
    }

    Ok(())
}

fn print_matches(history_path: &Path, query: &str, limit: usize, highlight: bool) -> Result<()> {
    let corpus = build_corpus(history_path)?;
    let ranked = rank(&corpus, query);

    let mut stdout = io::stdout().lock();
    for text in ranked.texts(corpus.entries()).into_iter().take(limit) {
        if highlight {
            writeln!(stdout, "{}", annotate(text, query))?;
        } else {
            writeln!(stdout, "{}", text)?;
        }
    }
    stdout.flush()?;

    Ok(())
}

#[derive(Serialize)]
struct StatsReport {
    history_file: String,
    last_modified: Option<String>,
    #[serde(flatten)]
    stats: HistoryStats,
}

fn show_stats(history_path: &Path, json: bool) -> Result<()> {
    let (corpus, raw) = build_corpus_with_raw(history_path)?;
    let stats = HistoryStats::compute(&raw, &corpus);

    let last_modified = fs::metadata(history_path)
        .and_then(|m| m.modified())
        .ok()
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string());

    let report = StatsReport {
        history_file: format_path_with_tilde(history_path),
        last_modified,
        stats,
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize stats")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Shell History Statistics");
    println!("========================");
    println!("Total lines: {}", report.stats.total_lines);
    println!("Distinct commands: {}", report.stats.distinct_commands);
    println!("Duplicates: {:.1}%", report.stats.duplicate_ratio * 100.0);
    println!();
    println!("History file: {}", report.history_file);
    if let Some(modified) = &report.last_modified {
        println!("Last modified: {}", modified);
    }

    if !report.stats.top_commands.is_empty() {
        println!();
        println!("Most repeated:");
        for (command, count) in &report.stats.top_commands {
            println!("  {:>5}  {}", count, command);
        }
    }

    Ok(())
}
