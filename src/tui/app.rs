//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the flow controller, the step table, the journal, and the completion
//! writer. `finish_tour` is the one place a completed flow is acted on.

use chrono::{DateTime, Utc};

use crate::config::paths::GangwayPaths;
use crate::config::settings::Settings;
use crate::diag::{run_checks, CheckResult};
use crate::error::GangwayResult;
use crate::flow::{Completion, CompletionWriter, FlowController, Step, TOUR_STEPS};
use crate::journal::{Journal, JournalEntry, SessionId};

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    Tour,
    #[default]
    Home,
    Status,
}

/// Main application state
pub struct App<'a> {
    /// Paths configuration
    pub paths: &'a GangwayPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub active_screen: ActiveScreen,

    /// The tour state machine
    pub flow: FlowController,

    /// The step table
    pub steps: &'static [Step],

    /// Identifier for the current tour run
    pub session: SessionId,

    /// The tour journal
    pub journal: Journal,

    /// Writer for the durable completion marker
    pub completion: CompletionWriter,

    /// Whether the tour has been completed or skipped
    pub tour_completed: bool,

    /// When the tour was completed, if known
    pub tour_completed_at: Option<DateTime<Utc>>,

    /// Whether the help overlay is showing
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Latest diagnostic results (status screen)
    pub checks: Vec<CheckResult>,

    /// Recent journal entries (home screen)
    pub recent_entries: Vec<JournalEntry>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    ///
    /// Creates the data directory up front so the journal can append from
    /// the very first event on a fresh install.
    pub fn new(paths: &'a GangwayPaths, settings: &Settings) -> GangwayResult<Self> {
        paths.ensure_directories()?;

        let session = SessionId::new();

        Ok(Self {
            paths,
            should_quit: false,
            active_screen: ActiveScreen::default(),
            flow: FlowController::new(TOUR_STEPS.len()),
            steps: TOUR_STEPS,
            session,
            journal: Journal::new(paths.journal_file()),
            completion: CompletionWriter::new(paths.clone(), session),
            tour_completed: settings.tour_completed,
            tour_completed_at: settings.tour_completed_at,
            show_help: false,
            status_message: None,
            checks: Vec::new(),
            recent_entries: Vec::new(),
        })
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch to a different screen
    pub fn switch_screen(&mut self, screen: ActiveScreen) {
        self.active_screen = screen;
        self.status_message = None;

        match screen {
            ActiveScreen::Home => self.refresh_home(),
            ActiveScreen::Status => self.refresh_checks(),
            ActiveScreen::Tour => {}
        }
    }

    /// Mount a fresh tour run and show it
    ///
    /// Used both on first launch and when replaying from the home screen.
    /// Each run gets its own session id and a controller back at step 0.
    pub fn start_tour(&mut self) {
        self.session = SessionId::new();
        self.flow = FlowController::new(self.steps.len());
        self.completion = CompletionWriter::new(self.paths.clone(), self.session);

        // Journaling is best effort; the tour shows either way
        let _ = self.journal.log(&JournalEntry::started(self.session));

        self.switch_screen(ActiveScreen::Tour);
    }

    /// Act on the tour ending
    ///
    /// The single consumer of a completed flow: journal the outcome, fire
    /// the durable completion write without waiting on it, and move to the
    /// home screen. The write's result is never consulted here.
    pub fn finish_tour(&mut self, how: Completion) {
        let entry = match how {
            Completion::Finished => JournalEntry::finished(self.session, self.flow.index()),
            Completion::Skipped => JournalEntry::skipped(self.session, self.flow.index()),
        };
        let _ = self.journal.log(&entry);

        self.completion.record();

        self.tour_completed = true;
        self.tour_completed_at = Some(Utc::now());

        self.switch_screen(ActiveScreen::Home);
    }

    /// Reload the recent journal entries shown on the home screen
    pub fn refresh_home(&mut self) {
        self.recent_entries = self.journal.read_recent(5).unwrap_or_default();
    }

    /// Re-run the diagnostic checks shown on the status screen
    pub fn refresh_checks(&mut self) {
        self.checks = run_checks(self.paths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::TourEvent;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn test_app(paths: &GangwayPaths) -> App<'_> {
        let settings = Settings::default();
        App::new(paths, &settings).unwrap()
    }

    #[test]
    fn test_start_tour_journals_and_switches() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        app.start_tour();

        assert_eq!(app.active_screen, ActiveScreen::Tour);
        assert_eq!(app.flow.index(), 0);

        let entries = app.journal.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, TourEvent::TourStarted);
    }

    #[test]
    fn test_fresh_install_keeps_journal_entries() {
        let temp_dir = TempDir::new().unwrap();
        // The data directory does not exist yet, as on a first launch
        let base = temp_dir.path().join("config").join("gangway");
        let paths = GangwayPaths::with_base_dir(base.clone());
        assert!(!base.exists());

        let mut app = test_app(&paths);
        app.start_tour();
        app.flow.skip();
        app.finish_tour(Completion::Skipped);

        let events: Vec<_> = app
            .journal
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.event)
            .collect();
        assert_eq!(events, vec![TourEvent::TourStarted, TourEvent::TourSkipped]);
    }

    #[test]
    fn test_replay_gets_fresh_session() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        app.start_tour();
        let first_session = app.session;
        app.flow.advance();

        app.start_tour();
        assert_ne!(app.session, first_session);
        assert_eq!(app.flow.index(), 0);
        assert!(!app.flow.is_completed());
    }

    #[test]
    fn test_finish_tour_journals_and_lands_home() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);
        app.start_tour();

        app.flow.skip();
        app.finish_tour(Completion::Skipped);

        assert_eq!(app.active_screen, ActiveScreen::Home);
        assert!(app.tour_completed);
        assert!(app.tour_completed_at.is_some());

        let entries = app.journal.read_all().unwrap();
        let events: Vec<_> = entries.iter().map(|e| e.event).collect();
        assert_eq!(events, vec![TourEvent::TourStarted, TourEvent::TourSkipped]);

        // The durable write happens in the background
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let settings = Settings::load_or_create(&paths).unwrap();
            if settings.tour_completed {
                break;
            }
            assert!(Instant::now() < deadline, "marker write never landed");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_finish_tour_writes_marker_exactly_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);
        app.start_tour();

        // Walk the whole tour
        while !app.flow.is_completed() {
            if let crate::flow::Transition::Completed(how) = app.flow.advance() {
                app.finish_tour(how);
            }
        }

        let entries = app.journal.read_all().unwrap();
        let finishes = entries
            .iter()
            .filter(|e| e.event == TourEvent::TourFinished)
            .count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn test_refresh_home_reads_recent_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        for _ in 0..7 {
            app.journal
                .log(&JournalEntry::started(app.session))
                .unwrap();
        }

        app.refresh_home();
        assert_eq!(app.recent_entries.len(), 5);
    }

    #[test]
    fn test_switch_to_status_runs_checks() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        assert!(app.checks.is_empty());
        app.switch_screen(ActiveScreen::Status);
        assert_eq!(app.checks.len(), 5);
    }
}
