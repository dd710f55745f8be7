use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use fastq_check::{CheckOptions, FastqChecker};

#[derive(Parser, Debug)]
#[command(
    name = "fastq-check",
    author,
    version,
    about = "Validate FASTQ files and report base/read statistics",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or two FASTQ files and print a JSON report
    Validate {
        /// Mate 1 FASTQ file (plain, .gz or .bz2)
        fastq1: PathBuf,
        /// Mate 2 FASTQ file for paired-end input
        #[arg(long)]
        mate2: Option<PathBuf>,
        /// Run full checks only every N records (counts stay exact)
        #[arg(long, default_value_t = 1)]
        stride: u64,
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate {
            fastq1,
            mate2,
            stride,
            pretty,
        } => run_validate(&fastq1, mate2.as_deref(), stride, pretty),
    }
}

fn run_validate(
    fastq1: &std::path::Path,
    mate2: Option<&std::path::Path>,
    stride: u64,
    pretty: bool,
) -> Result<ExitCode> {
    let checker = FastqChecker::open(fastq1, mate2, CheckOptions { stride })?;
    let report = checker.run();
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    if report.has_error() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
