//! Project show command.

use crate::cli::output;
use crate::cli::ProjectArgs;
use crate::core::config::Config;
use crate::core::remote::CircleCi;
use crate::error::Result;

/// Pretty-print the project record.
pub fn show(project: &ProjectArgs) -> Result<()> {
    let config = Config::load()?;
    let slug = project.slug(&config)?;
    let client = CircleCi::from_config(&config)?;

    let record = client.project(&slug)?;
    output::data(&serde_json::to_string_pretty(&record)?);
    Ok(())
}
