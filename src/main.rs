use anyhow::Result;
use clap::{Parser, Subcommand};

use gangway::cli::{handle_journal_command, handle_reset_command, handle_status_command};
use gangway::config::{GangwayPaths, Settings};
use gangway::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "gangway",
    author = "Kaylee Beyene",
    version,
    about = "Guided first-run tour for terminal applications",
    long_about = "Gangway walks new users through an application's surface one \
                  step at a time, records completion once, and stays out of the \
                  way afterwards. Run it with no arguments to see where it left off."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the guided tour (or the home screen once completed)
    #[command(alias = "ui")]
    Tour,

    /// Show environment checks
    Status,

    /// Show recent tour activity
    Journal {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Clear the completion flag so the tour runs again
    Reset,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GangwayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tour) => {
            run_tui(&paths, &settings)?;
        }
        Some(Commands::Status) => {
            handle_status_command(&paths)?;
        }
        Some(Commands::Journal { limit }) => {
            handle_journal_command(&paths, limit)?;
        }
        Some(Commands::Reset) => {
            handle_reset_command(&paths)?;
        }
        Some(Commands::Config) => {
            println!("Gangway Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Journal file:     {}", paths.journal_file().display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!("  Tour completed: {}", settings.tour_completed);
            if let Some(at) = settings.tour_completed_at {
                println!("  Completed at:   {}", at.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        None => {
            println!("Gangway - Guided first-run tours for the terminal");
            println!();
            println!("Run 'gangway --help' for usage information.");
            println!("Run 'gangway tour' to launch the interactive tour.");
        }
    }

    Ok(())
}
