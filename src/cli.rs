use clap::Parser;

/// Command-line interface definition.
/// Provides command-line options for breach lookups against BreachDirectory.
///
/// Verbosity levels:
/// 0 - silent (only the report file)
/// 1 - errors + progress (default)
/// 2 - warnings + errors
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Check email addresses against the BreachDirectory breach database and save hits to a CSV report"
)]
pub struct Cli {
    /// Single email address to check for breaches.
    #[arg(short = 'e', long = "email", conflicts_with = "list")]
    pub email: Option<String>,

    /// CSV file with the emails to check; all emails in the first row, one per cell.
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub list: Option<String>,

    /// API key for breachdirectory.p.rapidapi.com.
    #[arg(short = 'k', long = "api-key", conflicts_with = "api_key_file")]
    pub api_key: Option<String>,

    /// Text file containing the API key.
    #[arg(short = 'f', long = "api-key-file", value_name = "FILE")]
    pub api_key_file: Option<String>,

    /// Delay between successive lookups in milliseconds.
    /// The BreachDirectory free plan requires at least 1000.
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Override the breach-lookup endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write the report to this path instead of the timestamped default.
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Show approximate shell-equivalent commands
    #[arg(long)]
    pub show_commands: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbose >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }

    /// Are progress lines (banner, per-email status) enabled?
    pub fn progress_enabled(&self) -> bool {
        self.verbose >= 1
    }

    /// Was a lookup target (single email or list file) provided?
    pub fn has_target(&self) -> bool {
        self.email.is_some() || self.list.is_some()
    }

    /// Was a credential (inline key or key file) provided?
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some() || self.api_key_file.is_some()
    }
}
