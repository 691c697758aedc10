//! Config commands.
//!
//! `config init` stores the API token and organization; `config show`
//! prints them with the token redacted.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::prompt::Terminal;
use crate::core::config::Config;
use crate::core::prompt::Prompt;
use crate::error::Result;

/// Write a new configuration, prompting for anything not given.
pub fn init(org: Option<String>, token: Option<String>) -> Result<()> {
    let prompt = Terminal::new(false);

    let token = match token {
        Some(token) => Zeroizing::new(token),
        None => Zeroizing::new(prompt.read_secret("CircleCI API token")?),
    };
    let org = match org {
        Some(org) => org,
        None => prompt.read_line("Organization name")?,
    };

    let config = Config::new(token.as_str(), org);
    let path = config.save()?;

    output::success("configuration saved");
    output::kv("path", path.display());
    output::kv("organization", &config.organization_name);
    Ok(())
}

/// Print the active configuration.
pub fn show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load_from(&path)?;

    output::header("Configuration");
    output::rule();
    output::kv("path", path.display());
    output::kv("organization", &config.organization_name);
    output::kv("api token", redact(&config.api_token));
    if let Some(url) = &config.api_url {
        output::kv("api url", url);
    }
    Ok(())
}

/// Keep only the last four characters.
fn redact(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(8), tail)
}
