//! Status CLI command
//!
//! Prints the environment checks as a table.

use tabled::{settings::Style, Table, Tabled};

use crate::config::GangwayPaths;
use crate::diag::{run_checks, CheckResult, CheckStatus};
use crate::error::GangwayResult;

/// One row of the status table
#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Check")]
    name: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl From<&CheckResult> for CheckRow {
    fn from(check: &CheckResult) -> Self {
        Self {
            status: format!("{} {}", check.status.glyph(), check.status.label()),
            name: check.name.to_string(),
            detail: check.detail.clone(),
        }
    }
}

/// Handle the status command
pub fn handle_status_command(paths: &GangwayPaths) -> GangwayResult<()> {
    let checks = run_checks(paths);
    let rows: Vec<CheckRow> = checks.iter().map(CheckRow::from).collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    let errors = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();

    if errors > 0 {
        println!();
        println!("{} check(s) failing.", errors);
    } else if warnings > 0 {
        println!();
        println!("{} warning(s). Run 'gangway tour' to finish setting up.", warnings);
    }

    Ok(())
}
