use clap::{Parser, Subcommand};

/// Command-line interface definition for timepairs
/// CLI tool to enter start/end time pairs and track the total duration
#[derive(Parser)]
#[command(
    name = "timepairs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Enter start/end time pairs and track the total duration, with undo/redo and persisted state",
    long_about = None
)]
pub struct Cli {
    /// Override state-store path (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty state store
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Show all time pairs and the computed total duration
    Show,

    /// Print only the total duration
    Total {
        #[arg(long = "raw", help = "Machine-readable output with 3 decimals")]
        raw: bool,
    },

    /// Append a time pair (fields may be left empty)
    Add {
        /// Start time as HH:MM
        start: Option<String>,

        /// End time as HH:MM
        end: Option<String>,
    },

    /// Set one field of a pair to a literal HH:MM value
    Set {
        /// Pair number as shown by `show` (1-based)
        index: usize,

        /// Which field: start or end
        field: String,

        /// Time as HH:MM, or an empty string to clear the field
        value: String,
    },

    /// Record the current time into a field
    Now {
        /// Pair number (1-based); omit to fill the first empty field
        index: Option<usize>,

        /// Which field: start or end (required when INDEX is given)
        field: Option<String>,
    },

    /// Delete a pair, or without INDEX clear the latest entered time
    Del {
        /// Pair number as shown by `show` (1-based)
        index: Option<usize>,
    },

    /// Clear all pairs and the last-recorded date
    Reset,

    /// Open an interactive editing session with undo/redo
    Edit,
}
