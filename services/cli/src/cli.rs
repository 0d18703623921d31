use crate::infra::bootstrap;
use crate::listings::{print_features, print_streets, print_year_bands};
use crate::report::{run_estimate, EstimateArgs};
use crate::session::run_interactive_session;
use clap::{Parser, Subcommand};
use mietspiegel::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mietspiegel",
    about = "Estimate the local reference rent from the published rent index",
    version
)]
struct Cli {
    /// Directory holding strassen.json, klassen.json and merkmale.json (overrides APP_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a single estimate from command-line arguments
    Estimate(EstimateArgs),
    /// List the known street names
    Streets,
    /// List the rent-relevant features with their points
    Features,
    /// List the construction periods usable instead of an exact year
    YearBands,
    /// Read input events line by line from stdin and print the result after each
    Session,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let tables = bootstrap(cli.data_dir)?;

    match cli.command {
        Command::Estimate(args) => run_estimate(tables, args),
        Command::Streets => print_streets(&tables),
        Command::Features => print_features(&tables),
        Command::YearBands => print_year_bands(),
        Command::Session => run_interactive_session(tables),
    }
}
