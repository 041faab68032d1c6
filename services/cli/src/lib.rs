mod cli;
mod demo;
mod infra;
mod report;

use gram_readiness::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
