//! Command-line interface for fieldtree
//!
//! Converts one notation string and prints the resulting lines.
//!
//! Usage:
//!   fieldtree [INPUT] [--sort-order <ORDER>] [--marker <CHAR>] [--json] [-d...]

use clap::Parser;
use fieldtree::{Report, DEFAULT_INPUT};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Parser, Debug)]
#[command(name = "fieldtree", version, about = "Flatten nested field notation into display lines")]
struct Cli {
    /// Notation to convert, e.g. "(id,employee(id,name))"
    #[arg(default_value = DEFAULT_INPUT)]
    input: String,

    /// Either 'input-order' or 'alphabetical'
    #[arg(short, long, default_value = "alphabetical")]
    sort_order: String,

    /// Character repeated once per level of nesting
    #[arg(short, long, default_value_t = '-')]
    marker: char,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let report = Report::generate_with_marker(&cli.input, &cli.sort_order, cli.marker);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match &report {
            Report::Success { lines, .. } => {
                for line in lines {
                    println!("{}", line);
                }
            }
            Report::Failure { message, .. } => eprintln!("Error: {}", message),
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fieldtree"]);
        assert_eq!(cli.input, DEFAULT_INPUT);
        assert_eq!(cli.sort_order, "alphabetical");
        assert_eq!(cli.marker, '-');
        assert!(!cli.json);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["fieldtree", "(b,a)", "-s", "input", "-m", "*", "--json", "-dd"]);
        assert_eq!(cli.input, "(b,a)");
        assert_eq!(cli.sort_order, "input");
        assert_eq!(cli.marker, '*');
        assert!(cli.json);
        assert_eq!(cli.debug, 2);
    }
}
