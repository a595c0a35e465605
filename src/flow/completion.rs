//! One-time durable completion write
//!
//! When the tour finishes or is skipped, the completion marker is written to
//! the settings file once, on a background thread. The write is fire and
//! forget: the screen transition never waits on it, a failure is not retried
//! or shown to the user, and the only trace of a failure is a journal entry.

use std::thread;

use crate::config::{GangwayPaths, Settings};
use crate::error::GangwayResult;
use crate::journal::{Journal, JournalEntry, SessionId};

/// Writes the durable completion marker
#[derive(Debug, Clone)]
pub struct CompletionWriter {
    paths: GangwayPaths,
    session: SessionId,
}

impl CompletionWriter {
    /// Create a writer for the given data directory and tour session
    pub fn new(paths: GangwayPaths, session: SessionId) -> Self {
        Self { paths, session }
    }

    /// Record completion without blocking the caller
    ///
    /// Spawns a thread for the settings write and returns immediately. The
    /// join handle is dropped on purpose: the caller's screen transition
    /// must not wait on the write, and the write's result never reaches the
    /// caller. A failed write is appended to the journal and forgotten.
    pub fn record(&self) {
        let paths = self.paths.clone();
        let session = self.session;

        let _ = thread::spawn(move || {
            if let Err(err) = write_marker(&paths) {
                let journal = Journal::new(paths.journal_file());
                let _ = journal.log(&JournalEntry::flag_write_failed(session, err.to_string()));
            }
        });
    }
}

/// Load the settings, set the completion marker, and save
fn write_marker(paths: &GangwayPaths) -> GangwayResult<()> {
    let mut settings = Settings::load_or_create(paths)?;
    settings.mark_tour_completed();
    settings.save(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::TourEvent;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn wait_for<F: Fn() -> bool>(what: &str, check: F) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !check() {
            assert!(Instant::now() < deadline, "timed out waiting for {}", what);
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_write_marker_sets_flag() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        write_marker(&paths).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.tour_completed);
        assert!(settings.tour_completed_at.is_some());
    }

    #[test]
    fn test_record_lands_in_background() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let writer = CompletionWriter::new(paths.clone(), SessionId::new());

        writer.record();

        wait_for("completion marker", || {
            Settings::load_or_create(&paths)
                .map(|s| s.tour_completed)
                .unwrap_or(false)
        });
    }

    #[test]
    fn test_failed_write_is_journaled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        // A directory where the settings file should be makes the save fail
        // while the journal stays writable.
        std::fs::create_dir_all(paths.settings_file()).unwrap();

        let session = SessionId::new();
        let writer = CompletionWriter::new(paths.clone(), session);
        writer.record();

        let journal = Journal::new(paths.journal_file());
        wait_for("journal entry", || journal.entry_count().unwrap_or(0) > 0);

        let entries = journal.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, TourEvent::FlagWriteFailed);
        assert_eq!(entries[0].session, session);
        assert!(entries[0].detail.is_some());
    }
}
