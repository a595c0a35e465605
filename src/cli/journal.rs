//! Journal CLI command
//!
//! Prints recent tour activity from the journal file.

use crate::config::GangwayPaths;
use crate::error::GangwayResult;
use crate::journal::Journal;

/// Handle the journal command
pub fn handle_journal_command(paths: &GangwayPaths, limit: usize) -> GangwayResult<()> {
    let journal = Journal::new(paths.journal_file());

    if !journal.exists() {
        println!("No journal entries yet.");
        return Ok(());
    }

    let entries = journal.read_recent(limit)?;
    if entries.is_empty() {
        println!("No journal entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
