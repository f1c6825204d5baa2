use clap::{Parser, Subcommand};

/// Command-line interface definition for attendlog
#[derive(Parser)]
#[command(
    name = "attendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check in and out of work, track hours and earnings in a local SQLite store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Compare calendar days in UTC instead of local time
    #[arg(global = true, long = "utc", hide = true)]
    pub utc: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check in (start today's session)
    In {
        /// Check-in time as ISO-8601 (defaults to now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Check out (close the open session and record it)
    Out {
        /// Check-out time as ISO-8601 (defaults to now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,

        /// Earnings for this session (overrides the hourly rate)
        #[arg(long = "earnings", value_name = "AMOUNT")]
        earnings: Option<String>,
    },

    /// Show whether a session is open, plus the dashboard numbers
    Status {
        /// Reference time as ISO-8601 (defaults to now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// List attendance records, newest first
    List {
        #[arg(long, short = 'n', help = "Show only the N most recent records")]
        limit: Option<usize>,
    },

    /// Show total hours, days present, average hours and earnings
    Stats {
        #[arg(long = "json", help = "Print the numbers as JSON")]
        json: bool,
    },

    /// Weekly earnings report (Monday to Sunday)
    Report {
        /// Any date inside the wanted week (YYYY-MM-DD, defaults to today)
        #[arg(long = "week", value_name = "DATE")]
        week: Option<String>,
    },

    /// Show or change the default hourly rate
    Rate {
        #[arg(long = "set", value_name = "AMOUNT", conflicts_with = "clear")]
        set: Option<String>,

        #[arg(long = "clear", help = "Remove the hourly rate")]
        clear: bool,
    },

    /// Delete all attendance records and the open session
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
