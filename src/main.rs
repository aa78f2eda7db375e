//! tidykit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tidykit::{
    cli::{Args, Command},
    config::{compile_prefix_pattern, default_config_path, require_input, Config},
    error::{exit_code, exit_codes, Error, Result},
    fs::{rename_in_dir, strip_marker_suffix, strip_numeric_prefix, RenameOptions},
    keys::build_record,
    output::{print_error, print_key_record, print_rename_report},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration; an explicit path must exist, the default one may not
    let mut config = match args.config.clone().or_else(default_config_path) {
        Some(path) => Config::load(&path)?,
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    // Merge CLI arguments into config
    args.command.merge_into_config(&mut config);

    // Validate the settings this command uses
    args.command.validate_config(&config)?;

    match &args.command {
        Command::Ltk(ltk_args) => run_ltk(&config, ltk_args.plain),
        Command::StripPrefix(strip_args) => run_strip_prefix(&config, strip_args.verbose),
        Command::StripSuffix(strip_args) => run_strip_suffix(&config, strip_args.verbose),
    }
}

fn run_ltk(config: &Config, plain: bool) -> Result<()> {
    let keys = &config.keys;
    let ltk = require_input("ltk", keys.ltk.as_deref())?;
    let erand = require_input("erand", keys.erand.as_deref())?;
    let ediv = require_input("ediv", keys.ediv.as_deref())?;

    let record = build_record(ltk, erand, ediv)?;
    print_key_record(&record, keys.format, plain)
}

fn run_strip_prefix(config: &Config, verbose: bool) -> Result<()> {
    let pattern = compile_prefix_pattern(&config.rename.prefix_pattern)?;
    let options = RenameOptions {
        dry_run: config.rename.dry_run,
        files_only: false,
    };

    let report = rename_in_dir(&config.rename_directory(), options, |name| {
        strip_numeric_prefix(name, &pattern)
    })?;

    print_rename_report(&report, verbose, "No names matching the prefix pattern found.");
    check_failures(report.failed())
}

fn run_strip_suffix(config: &Config, verbose: bool) -> Result<()> {
    let marker = config.rename.suffix_marker.as_str();
    let options = RenameOptions {
        dry_run: config.rename.dry_run,
        files_only: true,
    };

    let report = rename_in_dir(&config.rename_directory(), options, |name| {
        strip_marker_suffix(name, marker)
    })?;

    print_rename_report(
        &report,
        verbose,
        &format!("No files ending with '{}' found.", marker),
    );
    check_failures(report.failed())
}

fn check_failures(failed: usize) -> Result<()> {
    if failed > 0 {
        return Err(Error::Rename(format!("{} entry(ies) could not be renamed", failed)));
    }
    Ok(())
}
