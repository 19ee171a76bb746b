//! bm2json CLI
//!
//! Converts benchmark logs into line-delimited JSON, one row per stage.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use bench_log::commands::{
    display_schema, display_version, execute_convert, validate_args, validate_log_file,
    ConvertArgs,
};

/// bm2json - benchmark log to JSON lines converter
#[derive(Parser, Debug)]
#[command(name = "bm2json")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert benchmark logs to JSON lines
    Convert {
        /// Log files to read in order ('-' or none for standard input)
        inputs: Vec<PathBuf>,

        /// Output path for JSON lines (standard output if omitted)
        #[arg(short, long, env = "BM2JSON_OUTPUT")]
        output: Option<PathBuf>,

        /// Print text summary to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Check that benchmark logs parse, without writing rows
    Validate {
        /// Log files to read in order ('-' or none for standard input)
        inputs: Vec<PathBuf>,
    },

    /// Display row schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so rows on stdout stay clean)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Convert {
            inputs,
            output,
            summary,
        } => {
            let args = ConvertArgs {
                inputs,
                output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_convert(args)?;
        }

        Commands::Validate { inputs } => {
            validate_log_file(&inputs)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
