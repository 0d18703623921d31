mod cli;
mod format;
mod infra;
mod listings;
mod report;
mod session;

use mietspiegel::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
