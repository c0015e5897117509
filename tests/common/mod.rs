//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for history files inside a temporary home directory
pub struct HistoryFileBuilder {
    temp_dir: TempDir,
    file_name: String,
    lines: Vec<String>,
    raw: Option<Vec<u8>>,
}

impl HistoryFileBuilder {
    /// Create a new builder for an empty `.bash_history`
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, file_name: ".bash_history".to_string(), lines: Vec::new(), raw: None }
    }

    /// Use a different file name (e.g. `.zsh_history`)
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    /// Append one command line (oldest first)
    pub fn command(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Append several command lines (oldest first)
    pub fn commands(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|s| s.to_string()));
        self
    }

    /// Write these exact bytes instead of the collected lines
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.raw = Some(bytes.to_vec());
        self
    }

    /// Write the file and return the home directory holding it
    pub fn build(self) -> HistoryHome {
        let path = self.temp_dir.path().join(&self.file_name);
        let mut file = fs::File::create(&path).expect("Failed to create history file");

        let content = match self.raw {
            Some(bytes) => bytes,
            None => {
                let mut text = self.lines.join("\n");
                if !text.is_empty() {
                    text.push('\n');
                }
                text.into_bytes()
            }
        };
        file.write_all(&content).expect("Failed to write history file");

        HistoryHome { temp_dir: self.temp_dir, history_path: path }
    }
}

impl Default for HistoryFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A temporary home directory with a history file in it
pub struct HistoryHome {
    temp_dir: TempDir,
    history_path: PathBuf,
}

impl HistoryHome {
    /// The home directory (usable as `$HOME`)
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The history file
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }
}

/// A realistic history with repeats, mixed case and fuzzy-only matches
pub fn realistic_history() -> HistoryHome {
    HistoryFileBuilder::new()
        .commands(&[
            "ls -la",
            "git status",
            "cd ~/projects/api",
            "git add .",
            "git commit -m 'Fix login'",
            "cargo test",
            "git push",
            "Git Log --oneline",
            "go install tools",
            "ls -la",
            "gradle integration test",
            "echo history works",
            "git status",
        ])
        .build()
}
