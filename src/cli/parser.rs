use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkweek
#[derive(Parser)]
#[command(
    name = "rworkweek",
    version = env!("CARGO_PKG_VERSION"),
    about = "Total your work week, see the hours left to 40 and when you can leave on Friday",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Calculate the week
    ///
    /// Each day takes an entry START,END,LUNCH. Every part may be left
    /// empty; a missing day is a blank day (8 hours assumed).
    ///
    /// Examples:
    ///   rworkweek calc --monday 8,5,60 --tuesday 7:30a,4:15p,30 --friday 8
    ///   rworkweek calc --monday ,5pm --wednesday ,,45
    Calc {
        /// Monday entry (START,END,LUNCH)
        #[arg(long, value_name = "ENTRY")]
        monday: Option<String>,
        /// Tuesday entry (START,END,LUNCH)
        #[arg(long, value_name = "ENTRY")]
        tuesday: Option<String>,
        /// Wednesday entry (START,END,LUNCH)
        #[arg(long, value_name = "ENTRY")]
        wednesday: Option<String>,
        /// Thursday entry (START,END,LUNCH)
        #[arg(long, value_name = "ENTRY")]
        thursday: Option<String>,
        /// Friday entry (START,END,LUNCH); start only projects the clock-out
        #[arg(long, value_name = "ENTRY")]
        friday: Option<String>,

        /// Output format (default from configuration)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Write json/csv output to this file (absolute path) instead of stdout
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
