mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "matlist",
    version,
    about = "Merge line items from PDF takeoffs into one material list"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,

    /// Log debug details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct BuildArgs {
    /// Directory containing the PDF files to consolidate
    #[arg(short, long, value_name = "DIR", default_value = matlist_core::DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Output spreadsheet (.xlsx, or .csv for plain CSV)
    #[arg(short, long, value_name = "FILE", default_value = matlist_core::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Leave out the RawExtract sheet
    #[arg(long)]
    no_raw_sheet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the line items extracted from a single PDF (without aggregating)
    Parse {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Some(Commands::Parse { pdf_file, output }) => commands::parse::run(pdf_file, &output),
        None => commands::build::run(cli.build.input, cli.build.output, !cli.build.no_raw_sheet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
