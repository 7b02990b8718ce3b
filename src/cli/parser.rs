use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftroster
/// CLI application to maintain a manager roster and shift windows in CSV tables
#[derive(Parser)]
#[command(
    name = "shiftroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple roster CLI: maintain managers, weekly availability and shift windows in CSV tables",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding roster.csv and shifts.csv
    /// (useful for tests or a portable setup)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and both tables
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Add a manager to the roster
    Add {
        /// Full name (first + last)
        name: String,

        /// Role (admin, shift, area)
        #[arg(long = "role", help = "Role: admin, shift or area")]
        role: Option<String>,

        /// Gender (M or F)
        #[arg(long = "gender", help = "Gender: M or F")]
        gender: Option<String>,

        #[arg(long = "mon", value_name = "HOURS", help = "Monday hours, e.g. 9-17")]
        mon: Option<String>,

        #[arg(long = "tue", value_name = "HOURS", help = "Tuesday hours")]
        tue: Option<String>,

        #[arg(long = "wed", value_name = "HOURS", help = "Wednesday hours")]
        wed: Option<String>,

        #[arg(long = "thu", value_name = "HOURS", help = "Thursday hours")]
        thu: Option<String>,

        #[arg(long = "fri", value_name = "HOURS", help = "Friday hours")]
        fri: Option<String>,

        #[arg(long = "sat", value_name = "HOURS", help = "Saturday hours")]
        sat: Option<String>,

        #[arg(long = "sun", value_name = "HOURS", help = "Sunday hours")]
        sun: Option<String>,
    },

    /// Update an existing manager (only the given fields change)
    Update {
        /// ID of the manager to update
        id: String,

        #[arg(long = "name", help = "New full name")]
        name: Option<String>,

        #[arg(long = "role", help = "Role: admin, shift or area")]
        role: Option<String>,

        #[arg(long = "gender", help = "Gender: M or F")]
        gender: Option<String>,

        #[arg(long = "mon", value_name = "HOURS", help = "Monday hours, 'off' to clear")]
        mon: Option<String>,

        #[arg(long = "tue", value_name = "HOURS", help = "Tuesday hours")]
        tue: Option<String>,

        #[arg(long = "wed", value_name = "HOURS", help = "Wednesday hours")]
        wed: Option<String>,

        #[arg(long = "thu", value_name = "HOURS", help = "Thursday hours")]
        thu: Option<String>,

        #[arg(long = "fri", value_name = "HOURS", help = "Friday hours")]
        fri: Option<String>,

        #[arg(long = "sat", value_name = "HOURS", help = "Saturday hours")]
        sat: Option<String>,

        #[arg(long = "sun", value_name = "HOURS", help = "Sunday hours")]
        sun: Option<String>,
    },

    /// Delete a manager by ID
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show the full profile of one manager
    Show { id: String },

    /// List the roster
    List {
        #[arg(long = "role", help = "Only managers with this role")]
        role: Option<String>,

        #[arg(long = "day", help = "Only managers available on this day")]
        day: Option<String>,
    },

    /// Manage the shift window table
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Print the operations log
    Log {
        #[arg(long = "print", help = "Print the operations log")]
        print: bool,
    },

    /// Export the roster or the shift table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export the shift table instead of the roster")]
        shifts: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Set the window for a (day, shift type) pair
    Set {
        /// Day label (mon..sun)
        day: String,

        /// Shift type (morning, afternoon, evening)
        shift: String,

        /// Hours, e.g. 8-14 ('off' clears the pair)
        hours: String,
    },

    /// Remove the window for a (day, shift type) pair
    Clear {
        day: String,
        shift: String,
    },

    /// Print all configured windows
    List,
}
