use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stockscope_analysis::{AnalysisError, analyze, parse_request};
use stockscope_types::AnalyticsConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(version, about = "Stock analytics over fetched bars and options chains")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an analysis request and print the result JSON
    Analyze {
        /// Request JSON file, or "-" for stdin
        #[arg(long, value_name = "FILE")]
        request: PathBuf,

        /// YAML analytics config; replaces any config embedded in the request
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Analyze {
            request,
            config,
            pretty,
        } => run_analyze(&request, config.as_deref(), pretty),
    };

    match outcome {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

// logs go to stderr; stdout carries only the result
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

fn run_analyze(
    request_path: &Path,
    config_path: Option<&Path>,
    pretty: bool,
) -> Result<String, AnalysisError> {
    let text = read_request(request_path)
        .map_err(|e| AnalysisError::ConfigParse(format!("{}: {e}", request_path.display())))?;
    let mut request = parse_request(&text)?;

    if let Some(path) = config_path {
        let config = AnalyticsConfig::from_yaml_file(path)
            .map_err(|e| AnalysisError::ConfigValidation(format!("{}: {e}", path.display())))?;
        request.config = Some(config);
    }

    analyze(request, pretty)
}

fn read_request(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
}
