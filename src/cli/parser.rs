use crate::export::ExportFormat;
use crate::models::GroupBy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
/// CLI application to record working hours and estimate wages
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily clock-in/out and breaks; total hours and wages per day, week and month",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a custom data set)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data file and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Add or update the record for a day
    Add {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,

        #[arg(
            long = "break",
            conflicts_with_all = ["break_start", "break_end"],
            help = "Break duration in minutes"
        )]
        break_minutes: Option<u32>,

        #[arg(long = "break-start", requires = "break_end", help = "Break start (HH:MM)")]
        break_start: Option<String>,

        #[arg(long = "break-end", requires = "break_start", help = "Break end (HH:MM)")]
        break_end: Option<String>,

        #[arg(long = "rate", help = "Hourly rate for this day")]
        rate: Option<f64>,

        #[arg(long = "loc", help = "Workplace label")]
        location: Option<String>,

        #[arg(long = "project", help = "Project label")]
        project: Option<String>,

        #[arg(long = "memo", help = "Free-text note")]
        memo: Option<String>,
    },

    /// Delete the record for a day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Clock in or out at the current time
    Punch {
        #[command(subcommand)]
        action: PunchAction,
    },

    /// Show the total for one day
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Show the Monday-to-Sunday week containing a date
    Week {
        /// Reference date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Show the calendar month containing a date
    Month {
        /// Reference date (YYYY-MM-DD or YYYY-MM), default today
        date: Option<String>,

        #[arg(long = "by", value_enum, help = "Break the month down by location or project")]
        by: Option<GroupBy>,
    },

    /// Totals per location or project over a period (default: all time)
    Totals {
        #[arg(long = "by", value_enum, help = "Group by location or project")]
        by: GroupBy,

        #[arg(long, short, help = "Restrict to year/month/day, a custom range A:B, or 'all'")]
        period: Option<String>,
    },

    /// List records
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range A:B, or 'all'")]
        period: Option<String>,
    },

    /// Export per-day rows
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Only rows of this project ('(unset)' for none)")]
        project: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PunchAction {
    /// Start the day
    In {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Time (HH:MM), default now")]
        at: Option<String>,
    },

    /// Close the latest open day
    Out {
        #[arg(long, help = "Time (HH:MM), default now")]
        at: Option<String>,
    },
}
