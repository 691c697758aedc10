//! Command-line interface.

pub mod completions;
pub mod config;
pub mod env;
pub mod output;
pub mod project;
pub mod prompt;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::domain::ProjectSlug;
use crate::error::Result;

/// ccienv - Manage CircleCI project environment variables.
#[derive(Parser)]
#[command(
    name = "ccienv",
    about = "Manage CircleCI project environment variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage the API token and organization
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Inspect a project
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage project environment variables
    Env {
        #[command(subcommand)]
        action: EnvAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Store the API token and organization
    Init {
        /// Organization name (prompted if omitted)
        #[arg(long)]
        org: Option<String>,
        /// Personal API token (prompted if omitted)
        #[arg(long, env = "CIRCLECI_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Show the current configuration
    Show,
}

/// Project subcommands.
#[derive(Subcommand)]
pub enum ProjectAction {
    /// Print the project record as JSON
    Show {
        #[command(flatten)]
        project: ProjectArgs,
    },
}

/// Environment variable subcommands.
#[derive(Subcommand)]
pub enum EnvAction {
    /// List variables
    Ls {
        #[command(flatten)]
        project: ProjectArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create or update a single variable
    Add {
        #[command(flatten)]
        project: ProjectArgs,
        /// Variable name
        name: String,
        /// Variable value (read as hidden input if omitted)
        value: Option<String>,
    },

    /// Create or update variables from a file or stdin
    Import {
        #[command(flatten)]
        project: ProjectArgs,
        /// Input file (stdin if omitted)
        path: Option<PathBuf>,
        /// Input format: dotenv or json
        #[arg(short, long, default_value = "dotenv")]
        format: String,
    },

    /// Delete variables
    Rm {
        #[command(flatten)]
        project: ProjectArgs,
        /// Variable names
        names: Vec<String>,
        /// Choose variables from a list
        #[arg(short, long, conflicts_with = "names")]
        interactive: bool,
    },
}

/// Which project to act on.
#[derive(Args, Clone, Debug)]
pub struct ProjectArgs {
    /// Repository name
    #[arg(short, long)]
    pub repo: String,
    /// Organization (defaults to the configured one)
    #[arg(long)]
    pub org: Option<String>,
    /// VCS prefix (gh, bb, circleci)
    #[arg(long)]
    pub vcs: Option<String>,
}

impl ProjectArgs {
    /// Resolve the slug, falling back to the configured organization.
    pub fn slug(&self, config: &Config) -> Result<ProjectSlug> {
        let org = self.org.as_deref().unwrap_or(&config.organization_name);
        ProjectSlug::new(self.vcs.as_deref(), org, &self.repo)
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, yes: bool) -> Result<()> {
    match command {
        Command::Config { action } => match action {
            ConfigAction::Init { org, token } => config::init(org, token),
            ConfigAction::Show => config::show(),
        },
        Command::Project { action } => match action {
            ProjectAction::Show { project } => project::show(&project),
        },
        Command::Env { action } => match action {
            EnvAction::Ls { project, json } => env::ls(&project, json),
            EnvAction::Add {
                project,
                name,
                value,
            } => env::add(&project, &name, value, yes),
            EnvAction::Import {
                project,
                path,
                format,
            } => env::import(&project, path, &format, yes),
            EnvAction::Rm {
                project,
                names,
                interactive,
            } => env::rm(&project, &names, interactive, yes),
        },
        Command::Completions { shell } => completions::execute(shell),
    }
}
