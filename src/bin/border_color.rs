use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use border_color::report::{ReportFormat, ReportOptions, render};
use border_color::sample;

#[derive(Parser, Debug)]
#[command(
    name = "border_color",
    about = "Report the most common color along an image's outer border",
    version
)]
struct Cli {
    /// Image to inspect
    path: PathBuf,

    /// Output format
    #[arg(long = "format", short = 'f', value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// List the N most common border colors
    #[arg(long = "top", short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    top: u32,

    /// Log decode and tally details to stderr
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let border = match sample(&cli.path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = ReportOptions {
        format: cli.format,
        top: cli.top as usize,
    };
    match render(&border, &options) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to render report: {e}");
            ExitCode::FAILURE
        }
    }
}
