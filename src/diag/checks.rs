//! Diagnostic checks
//!
//! Each check inspects one part of the environment and reports a severity
//! plus a short human-readable detail. Checks never fail outright; anything
//! broken is reported as an `Error` result instead.

use crate::config::{GangwayPaths, Settings};
use crate::journal::Journal;

/// Severity of a diagnostic result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Everything as expected
    Ok,
    /// Usable, but worth a look
    Warning,
    /// Broken
    Error,
}

impl CheckStatus {
    /// Get the glyph for this status
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Ok => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the label for this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Outcome of a single diagnostic check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// What was checked
    pub name: &'static str,
    /// How it went
    pub status: CheckStatus,
    /// Short human-readable detail
    pub detail: String,
}

impl CheckResult {
    fn ok(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Ok,
            detail: detail.into(),
        }
    }

    fn warning(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Warning,
            detail: detail.into(),
        }
    }

    fn error(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Error,
            detail: detail.into(),
        }
    }
}

/// Run every diagnostic check against the given data directory
pub fn run_checks(paths: &GangwayPaths) -> Vec<CheckResult> {
    vec![
        check_config_dir(paths),
        check_settings(paths),
        check_completion_marker(paths),
        check_journal(paths),
        check_terminal_size(),
    ]
}

fn check_config_dir(paths: &GangwayPaths) -> CheckResult {
    let name = "Config directory";
    let base = paths.base_dir();
    if !base.is_dir() {
        return CheckResult::warning(name, format!("{} (created on first save)", base.display()));
    }

    // An existing directory can still be read-only; round-trip a marker file.
    let marker = base.join(".write-test");
    match std::fs::write(&marker, b"").and_then(|_| std::fs::remove_file(&marker)) {
        Ok(()) => CheckResult::ok(name, base.display().to_string()),
        Err(err) => CheckResult::error(name, format!("not writable: {}", err)),
    }
}

fn check_settings(paths: &GangwayPaths) -> CheckResult {
    let name = "Settings file";
    if !paths.is_initialized() {
        return CheckResult::warning(name, "not created yet");
    }

    match Settings::load_or_create(paths) {
        Ok(settings) => CheckResult::ok(name, format!("schema version {}", settings.schema_version)),
        Err(err) => CheckResult::error(name, err.to_string()),
    }
}

fn check_completion_marker(paths: &GangwayPaths) -> CheckResult {
    let name = "Completion marker";
    match Settings::load_or_create(paths) {
        Ok(settings) if settings.tour_completed => {
            let detail = match settings.tour_completed_at {
                Some(at) => format!("completed {}", at.format("%Y-%m-%d %H:%M UTC")),
                None => "completed".to_string(),
            };
            CheckResult::ok(name, detail)
        }
        Ok(_) => CheckResult::ok(name, "tour pending"),
        Err(_) => CheckResult::warning(name, "unknown (settings unreadable)"),
    }
}

fn check_journal(paths: &GangwayPaths) -> CheckResult {
    let name = "Tour journal";
    let journal = Journal::new(paths.journal_file());
    if !journal.exists() {
        return CheckResult::ok(name, "no entries yet");
    }

    match journal.read_all() {
        Ok(entries) if entries.len() == 1 => CheckResult::ok(name, "1 entry"),
        Ok(entries) => CheckResult::ok(name, format!("{} entries", entries.len())),
        Err(err) => CheckResult::error(name, err.to_string()),
    }
}

fn check_terminal_size() -> CheckResult {
    let name = "Terminal size";
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols >= 80 && rows >= 24 => {
            CheckResult::ok(name, format!("{}x{}", cols, rows))
        }
        Ok((cols, rows)) => CheckResult::warning(
            name,
            format!("{}x{} (80x24 recommended)", cols, rows),
        ),
        Err(_) => CheckResult::warning(name, "size unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{JournalEntry, SessionId};
    use tempfile::TempDir;

    #[test]
    fn test_status_tokens() {
        assert_eq!(CheckStatus::Ok.glyph(), "+");
        assert_eq!(CheckStatus::Warning.label(), "warning");
        assert_eq!(CheckStatus::Error.glyph(), "x");
    }

    #[test]
    fn test_fresh_directory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().join("missing"));

        let results = run_checks(&paths);
        assert_eq!(results.len(), 5);

        assert_eq!(results[0].name, "Config directory");
        assert_eq!(results[0].status, CheckStatus::Warning);

        assert_eq!(results[1].name, "Settings file");
        assert_eq!(results[1].status, CheckStatus::Warning);

        assert_eq!(results[2].name, "Completion marker");
        assert_eq!(results[2].detail, "tour pending");

        assert_eq!(results[3].name, "Tour journal");
        assert_eq!(results[3].detail, "no entries yet");
    }

    #[test]
    fn test_config_dir_writable() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let result = check_config_dir(&paths);
        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.detail, temp_dir.path().display().to_string());
        // The marker file must not be left behind
        assert!(!temp_dir.path().join(".write-test").exists());
    }

    #[test]
    fn test_unwritable_config_dir_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        // A directory squatting on the marker path makes the write fail,
        // regardless of file permissions.
        std::fs::create_dir_all(temp_dir.path().join(".write-test")).unwrap();

        let result = check_config_dir(&paths);
        assert_eq!(result.status, CheckStatus::Error);
        assert!(result.detail.contains("not writable"));
    }

    #[test]
    fn test_saved_settings_pass() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.mark_tour_completed();
        settings.save(&paths).unwrap();

        let settings_check = check_settings(&paths);
        assert_eq!(settings_check.status, CheckStatus::Ok);

        let marker_check = check_completion_marker(&paths);
        assert_eq!(marker_check.status, CheckStatus::Ok);
        assert!(marker_check.detail.starts_with("completed "));
    }

    #[test]
    fn test_corrupt_settings_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), "not json at all").unwrap();

        let result = check_settings(&paths);
        assert_eq!(result.status, CheckStatus::Error);
    }

    #[test]
    fn test_journal_entry_count() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let journal = Journal::new(paths.journal_file());
        let session = SessionId::new();
        journal.log(&JournalEntry::started(session)).unwrap();

        assert_eq!(check_journal(&paths).detail, "1 entry");

        journal.log(&JournalEntry::skipped(session, 0)).unwrap();
        assert_eq!(check_journal(&paths).detail, "2 entries");
    }

    #[test]
    fn test_terminal_check_never_panics() {
        // No terminal attached under the test runner; any status is fine.
        let result = check_terminal_size();
        assert_eq!(result.name, "Terminal size");
    }
}
