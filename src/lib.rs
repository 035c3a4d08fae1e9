pub mod errors;
pub mod fsutil;
pub mod generate;
pub mod logger;
pub mod template;

use crate::errors::FixtureError;
use crate::generate::{GenerateOptions, GenerateReport};

/// Generate the default fixture set (1, 5 and 10 MB) into the current
/// working directory. Fixtures that already exist are skipped, never
/// overwritten.
pub fn generate_default() -> Result<GenerateReport, FixtureError> {
    generate::generate_all(&GenerateOptions::default())
}

/// Initializes the logging system.
///
/// This function should be called once before running the generator;
/// calling it again is a no-op.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
