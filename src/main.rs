mod batch;
mod cli;
mod config;
mod errors;
mod input;
mod lookup;
mod records;
mod report;
mod style;

use std::path::PathBuf;

use cli::Cli;
use config::Config;
use errors::Result;
use lookup::BreachClient;
use style::ConsoleStyle;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    let style = if cli.no_color {
        ConsoleStyle::without_colors()
    } else {
        ConsoleStyle::new()
    };

    if cli.progress_enabled() {
        print_banner(&style);
    }

    // Without both a lookup target and a credential there is nothing to run;
    // show the usage examples instead.
    if !cli.has_target() || !cli.has_credential() {
        print_usage_examples();
        return Ok(());
    }

    // Load configuration
    let mut config = Config::from_env();
    config.merge_with_cli(&cli);

    if let Err(e) = config.validate() {
        if cli.error_enabled() {
            eprintln!("Configuration error: {e}");
        }
        return Ok(());
    }

    let api_key = match (&cli.api_key, &cli.api_key_file) {
        (Some(key), _) => key.clone(),
        (None, Some(path)) => input::load_api_key(path, &cli)?,
        // Guarded by has_credential() above.
        (None, None) => return Ok(()),
    };

    let emails: Vec<String> = match (&cli.email, &cli.list) {
        (Some(email), _) => vec![email.clone()],
        (None, Some(path)) => input::read_email_row(path)?,
        // Guarded by has_target() above.
        (None, None) => return Ok(()),
    };

    if emails.is_empty() {
        if cli.error_enabled() {
            eprintln!("No email addresses found in the input file.");
        }
        return Ok(());
    }

    let client = BreachClient::new(&config.network.endpoint, config.network.request_timeout)?;
    let results =
        batch::check_many(&client, &emails, &api_key, config.network.rate_limit, &cli).await;

    if results.is_empty() {
        return Ok(());
    }

    let path = cli
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(report::default_report_path);
    report::write_report(&path, &results)?;

    if cli.progress_enabled() {
        println!(
            "{}",
            style.success(&format!("Results saved to CSV file: {}.", path.display()))
        );
        println!(
            "{}",
            style.muted("Only emails with detected breaches are listed in the file.")
        );
    }

    Ok(())
}

fn print_banner(style: &ConsoleStyle) {
    let edge = "========================================";
    println!("{}", style.banner(edge));
    println!("{}", style.banner("=            breachwatch               ="));
    println!("{}", style.banner("= a tool for detecting breached emails ="));
    println!("{}", style.banner(edge));
}

fn print_usage_examples() {
    println!("Usage examples:");
    println!("  breachwatch -e <email> -k <api_key>          Check a single email for breaches.");
    println!("  breachwatch -l <file.csv> -k <api_key>       Check emails from a CSV file.");
    println!("  breachwatch -l <file.csv> -f <api_key.txt>   Load the API key from a text file.");
    println!("  breachwatch --help                           Show the full option list.");
}
