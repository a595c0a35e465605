//! Reset CLI command
//!
//! Clears the completion flag so the tour runs again on next launch.

use crate::config::{GangwayPaths, Settings};
use crate::error::GangwayResult;
use crate::journal::{Journal, JournalEntry, SessionId};

/// Handle the reset command
pub fn handle_reset_command(paths: &GangwayPaths) -> GangwayResult<()> {
    let mut settings = Settings::load_or_create(paths)?;
    let was_completed = settings.tour_completed;

    settings.clear_tour_completed();
    settings.save(paths)?;

    let journal = Journal::new(paths.journal_file());
    journal.log(&JournalEntry::reset(SessionId::new()))?;

    if was_completed {
        println!("Tour completion flag cleared.");
    } else {
        println!("Tour was not completed. Nothing to clear.");
    }
    println!("Run 'gangway tour' to take the tour.");

    Ok(())
}
