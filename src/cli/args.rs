//! Command-line argument definitions using clap.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{validate_rename_config, Config, OutputFormat};
use crate::error::Result;

/// tidykit CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tidykit",
    version,
    about = "Pairing key transformer and filename strippers",
    long_about = "Small utilities for dual-boot housekeeping.\n\n\
                  Converts Bluetooth LE long-term keys into BlueZ info file records, \
                  and strips track-number prefixes or marker suffixes from filenames."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, global = true, env = "TIDYKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a [LongTermKey] record from comma-separated octet lists.
    Ltk(LtkArgs),

    /// Strip a numeric prefix such as "01. " from names in a directory.
    StripPrefix(StripPrefixArgs),

    /// Strip a marker such as "_apfix" from the end of file stems.
    StripSuffix(StripSuffixArgs),
}

#[derive(ClapArgs, Debug)]
pub struct LtkArgs {
    /// Long-term key octets, e.g. "A1,B2,C3,...".
    #[arg(long)]
    pub ltk: Option<String>,

    /// ERand octets in display order; stored reversed.
    #[arg(long)]
    pub erand: Option<String>,

    /// EDiv octets.
    #[arg(long)]
    pub ediv: Option<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Print only the record, without instructions.
    #[arg(long)]
    pub plain: bool,
}

#[derive(ClapArgs, Debug)]
pub struct StripPrefixArgs {
    /// Directory to process (defaults to the config value, then ".").
    pub directory: Option<PathBuf>,

    /// Regex removed from the start of each name.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Show what would be renamed without renaming.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also report entries that were skipped.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ClapArgs, Debug)]
pub struct StripSuffixArgs {
    /// Directory to process (defaults to the config value, then ".").
    pub directory: Option<PathBuf>,

    /// Marker removed from the end of each file stem.
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Show what would be renamed without renaming.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also report entries that were skipped.
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// [LongTermKey] text block.
    Text,
    /// JSON object.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Command {
    /// Validate only the parts of the config this command reads.
    pub fn validate_config(&self, config: &Config) -> Result<()> {
        match self {
            Command::Ltk(_) => Ok(()),
            Command::StripPrefix(_) | Command::StripSuffix(_) => {
                validate_rename_config(&config.rename)
            }
        }
    }

    /// Merge subcommand arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        match self {
            Command::Ltk(args) => {
                if let Some(ltk) = &args.ltk {
                    config.keys.ltk = Some(ltk.clone());
                }

                if let Some(erand) = &args.erand {
                    config.keys.erand = Some(erand.clone());
                }

                if let Some(ediv) = &args.ediv {
                    config.keys.ediv = Some(ediv.clone());
                }

                if let Some(format) = args.format {
                    config.keys.format = format.into();
                }
            }
            Command::StripPrefix(args) => {
                if let Some(dir) = &args.directory {
                    config.rename.directory = Some(dir.clone());
                }

                if let Some(pattern) = &args.pattern {
                    config.rename.prefix_pattern = pattern.clone();
                }

                // Boolean flags only override when set
                if args.dry_run {
                    config.rename.dry_run = true;
                }
            }
            Command::StripSuffix(args) => {
                if let Some(dir) = &args.directory {
                    config.rename.directory = Some(dir.clone());
                }

                if let Some(marker) = &args.marker {
                    config.rename.suffix_marker = marker.clone();
                }

                if args.dry_run {
                    config.rename.dry_run = true;
                }
            }
        }
    }
}
