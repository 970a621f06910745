use clap::{Parser, Subcommand};

/// Command-line interface definition for rworkreport
/// CLI application to generate and maintain monthly work-time reports
#[derive(Parser)]
#[command(
    name = "rworkreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate monthly work-time reports and keep them in sync with editable CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data directories and template document
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(
            long = "set-send-dir",
            value_name = "DIR",
            help = "Set the destination directory for sent reports"
        )]
        set_send_dir: Option<String>,
    },

    /// Create a report document and its editable CSV for a month
    Create {
        /// Target month (YYYY/MM)
        #[arg(long = "month")]
        month: String,

        /// Reporting user name (must not contain underscores)
        #[arg(long = "user")]
        user: String,

        /// Client name stamped into the report
        #[arg(long = "client")]
        client: String,
    },

    /// Regenerate the editable CSV for a month with default times
    Gencsv {
        /// Target month (YYYY/MM)
        #[arg(long = "month")]
        month: String,
    },

    /// Update a report document from a work-data CSV file
    Update {
        /// Report filename inside the output directory
        #[arg(long = "file")]
        file: String,

        /// CSV filename inside the CSV directory
        #[arg(long = "csv")]
        csv: String,
    },

    /// Apply the latest CSV to every report document of its month
    Save,

    /// Package a report as a password-protected zip with mail text
    Send {
        /// Report filename (default: first report matching the latest CSV)
        #[arg(long = "file")]
        file: Option<String>,
    },

    /// Render a report document to XLSX
    Export {
        /// Report filename inside the output directory
        #[arg(long = "file")]
        file: String,

        /// Output XLSX path
        #[arg(long = "out", value_name = "FILE")]
        out: String,
    },
}
