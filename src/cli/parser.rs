use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSupplyLog
/// CLI application to capture receipt images and log supply reports in SQLite
#[derive(Parser)]
#[command(
    name = "rsupplylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple supply-report CLI: OCR receipt images and log daily supply/exchange figures in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
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

    /// Capture a receipt image: OCR, extract the figures, confirm and save
    Capture {
        /// Path of the receipt image (PNG/JPEG/GIF/BMP/TIFF/WebP)
        image: String,

        /// Accept all extracted values without prompting
        #[arg(long = "yes", short = 'y')]
        yes: bool,

        /// Attach a note to the saved report
        #[arg(long = "notes")]
        notes: Option<String>,

        /// Report date (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Report time (HH:MM, default now)
        #[arg(long = "time")]
        time: Option<String>,

        /// Override the configured OCR binary
        #[arg(long = "ocr")]
        ocr: Option<String>,

        /// Override the configured OCR language profile
        #[arg(long = "langs")]
        langs: Option<String>,
    },

    /// Add a report manually (no OCR)
    Add {
        /// Report date (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Report time (HH:MM, default now)
        #[arg(long = "time")]
        time: Option<String>,

        /// Supplied cards count
        #[arg(long = "supply-cards", default_value = "0")]
        supply_cards: String,

        /// Supply unit amount
        #[arg(long = "supply-amount", default_value = "0")]
        supply_amount: String,

        /// Supply total amount
        #[arg(long = "supply-total", default_value = "0")]
        supply_total: String,

        /// Exchanged cards count
        #[arg(long = "exchange-cards", default_value = "0")]
        exchange_cards: String,

        /// Exchange amount
        #[arg(long = "exchange-amount", default_value = "0")]
        exchange_amount: String,

        /// Attach a note to the saved report
        #[arg(long = "notes")]
        notes: Option<String>,

        /// Attach an image file to the saved report
        #[arg(long = "image")]
        image: Option<String>,
    },

    /// List saved reports
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's reports")]
        now: bool,
    },

    /// Print the aggregated daily report
    Report {
        /// Date to aggregate (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Delete a report by ID
    Del {
        /// ID of the report to delete
        id: i64,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export saved reports
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

        #[arg(long, short = 'f')]
        force: bool,
    },
}
