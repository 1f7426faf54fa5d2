//! CODEOWNERS Prune CLI
//!
//! A command-line tool that reports CODEOWNERS entries whose files or
//! patterns no longer exist, and optionally writes a patch removing them.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::HumanOutput;
use codeowners_prune_core::{Manifest, find_stale_entries, generate_patch};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(args);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the pruner with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let use_colors = !args.json && io::stdout().is_terminal();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    debug!("validated configuration: {:?}", config);
    info!("CODEOWNERS file: {}", config.codeowners_path.display());
    info!("project root: {}", config.root.path().display());

    // Read and parse the CODEOWNERS file
    let manifest = match Manifest::load(&config.codeowners_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let stale = find_stale_entries(&manifest, &config.root);
    debug!("{} stale entries found", stale.len());

    if config.patch {
        let mut output = HumanOutput::new(&mut stdout, use_colors);

        if stale.is_empty() {
            let _ = output.write_nothing_to_patch();
            return ExitCode::Success;
        }

        let patch = generate_patch(&manifest, &stale);
        if let Err(e) = std::fs::write(&config.patch_output, &patch) {
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&format!(
                "failed to write patch file '{}': {}",
                config.patch_output.display(),
                e
            ));
            return ExitCode::StartupFailure;
        }

        info!("patch written to {}", config.patch_output.display());
        let _ = output.write_patch_written(stale.len(), &config.patch_output);
        return ExitCode::Success;
    }

    if config.json_output {
        if let Err(e) = cli::output::write_json(&mut stdout, &stale) {
            error!("failed to write JSON output: {}", e);
            return ExitCode::StartupFailure;
        }
        return ExitCode::Success;
    }

    if let Err(e) = HumanOutput::new(&mut stdout, use_colors).write_report(&stale) {
        error!("failed to write report: {}", e);
        return ExitCode::StartupFailure;
    }

    ExitCode::Success
}
