// TUI module for the interactive picker
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;
use tracing::{info, warn};

use crate::config::PickerConfig;
use crate::models::Corpus;

/// Run the interactive picker and return the chosen command, if any
pub fn run_interactive(corpus: Corpus, config: PickerConfig) -> Result<Option<String>> {
    info!(entries = corpus.len(), "starting interactive picker");

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(corpus, config);

    // Run event loop
    let res = app.run(manager.terminal_mut());

    // Restore terminal before reporting either outcome
    finish(res, manager.restore())
}

/// Combine the event loop outcome with the restore outcome
///
/// A restore failure only wins when the loop itself succeeded without a selection; a chosen
/// command is still returned, and a loop error is reported in preference to a restore error.
fn finish(res: Result<Option<String>>, restored: Result<()>) -> Result<Option<String>> {
    match (res, restored) {
        (res, Ok(())) => res,
        (Ok(None), Err(e)) => Err(e),
        (res, Err(e)) => {
            warn!("Failed to restore terminal: {:#}", e);
            res
        }
    }
}
