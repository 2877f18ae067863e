use clap::Parser;
use file_stats_cli::args::Args;
use file_stats_cli::config::Config;
use file_stats_cli::{logging, presentation};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("Logger Error: {e}");
    }

    match file_stats_cli::run(&config) {
        Ok(result) => {
            for err in &result.errors {
                eprintln!("Error reading file: {err}");
            }

            let mut out = io::stdout().lock();
            if let Err(e) = presentation::print_results(&result.stats, &config, &mut out)
                .and_then(|()| out.flush().map_err(Into::into))
            {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }

            if result.errors.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error reading file: {e}");
            ExitCode::FAILURE
        }
    }
}
