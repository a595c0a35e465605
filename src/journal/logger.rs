//! Append-only journal writer
//!
//! Provides the Journal struct that writes tour entries to a log file.
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{GangwayError, GangwayResult};

use super::entry::JournalEntry;

/// Handles writing tour entries to the journal file
///
/// The file uses a line-delimited JSON format (JSONL) where each line is a
/// complete JSON object representing one entry.
pub struct Journal {
    /// Path to the journal file
    log_path: PathBuf,
}

impl Journal {
    /// Create a new Journal that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log a journal entry
    ///
    /// Appends the entry as a JSON line to the journal file.
    /// Each write is flushed immediately to ensure durability.
    pub fn log(&self, entry: &JournalEntry) -> GangwayResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| GangwayError::journal(format!("Failed to open journal: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| GangwayError::journal(format!("Failed to serialize entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| GangwayError::journal(format!("Failed to write entry: {}", e)))?;

        file.flush()
            .map_err(|e| GangwayError::journal(format!("Failed to flush journal: {}", e)))?;

        Ok(())
    }

    /// Read all entries from the journal file
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> GangwayResult<Vec<JournalEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| GangwayError::journal(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                GangwayError::journal(format!(
                    "Failed to read journal line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: JournalEntry = serde_json::from_str(&line).map_err(|e| {
                GangwayError::journal(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the journal
    pub fn read_recent(&self, count: usize) -> GangwayResult<Vec<JournalEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the number of entries in the journal
    pub fn entry_count(&self) -> GangwayResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| GangwayError::journal(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let count = reader.lines().filter(|l| l.is_ok()).count();

        Ok(count)
    }

    /// Check if the journal file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the journal file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
