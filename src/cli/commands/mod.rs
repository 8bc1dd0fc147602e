//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod clean;
pub mod create;
pub mod deps;
pub mod interactive;
pub mod list;
pub mod notes;
pub mod open;
pub mod promote;
pub mod status;
pub mod templates;
pub mod workspace;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::defaults::DEFAULT_TEMPLATE;
use crate::core::listing::{ListOptions, SortKey};
use crate::core::settings::Settings;
use crate::infra::dirs::ShedDirs;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new playground
    Create {
        /// Playground name
        #[arg(short, long)]
        name: String,

        /// Template to start from
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List playgrounds
    List {
        /// Show tags
        #[arg(long)]
        tags: bool,

        /// Only show playgrounds with this tag
        #[arg(long)]
        filter_tag: Option<String>,

        /// Sort by name, created or accessed
        #[arg(long, default_value = "name")]
        sort: SortKey,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,
    },

    /// Show or set a playground's notes
    Notes {
        /// Playground name
        #[arg(short, long)]
        name: String,

        /// New notes text
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Open a playground in your editor
    Open {
        /// Playground name
        #[arg(short, long)]
        name: String,
    },

    /// Move a playground out of the registry into a regular directory
    Promote {
        /// Playground name
        #[arg(short, long)]
        name: String,

        /// Destination directory (default: ./NAME)
        #[arg(short, long, alias = "dest")]
        destination: Option<PathBuf>,
    },

    /// Remove playgrounds not accessed for a while
    Clean {
        /// Age threshold, e.g. 720h, 30d, 1h30m
        #[arg(long)]
        older_than: Option<String>,

        /// Only show what would be removed
        #[arg(long)]
        dry_run: bool,
    },

    /// List available templates
    Templates,

    /// Manage workspaces
    #[command(subcommand)]
    Workspace(WorkspaceCommands),

    /// Show a playground's direct dependencies
    Deps {
        /// Playground name
        #[arg(short, long)]
        name: String,
    },

    /// Show a playground's metadata and git status
    Status {
        /// Playground name
        #[arg(short, long)]
        name: String,
    },

    /// Create a playground interactively
    #[command(alias = "i")]
    Interactive,
}

/// Workspace subcommands
#[derive(Subcommand, Debug)]
pub enum WorkspaceCommands {
    /// Create a workspace
    Create {
        /// Workspace name
        name: String,

        /// Switch to it after creating
        #[arg(long)]
        default: bool,
    },

    /// List workspaces
    List,

    /// Switch the current workspace ("default" for the standard root)
    Switch {
        /// Workspace name
        name: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        let settings = Settings::load(ShedDirs::new()).context("Failed to load configuration")?;

        match self {
            Self::Create {
                name,
                template,
                tags,
            } => create::execute(&settings, &name, &template, tags.as_deref()).await,
            Self::List {
                tags,
                filter_tag,
                sort,
                reverse,
            } => {
                let options = ListOptions {
                    filter_tag,
                    sort,
                    reverse,
                };
                list::execute(&settings, &options, tags).await
            }
            Self::Notes { name, text } => notes::execute(&settings, &name, text.as_deref()).await,
            Self::Open { name } => open::execute(&settings, &name).await,
            Self::Promote { name, destination } => {
                promote::execute(&settings, &name, destination).await
            }
            Self::Clean {
                older_than,
                dry_run,
            } => clean::execute(&settings, older_than.as_deref(), dry_run).await,
            Self::Templates => templates::execute().await,
            Self::Workspace(cmd) => workspace::execute(settings, cmd).await,
            Self::Deps { name } => deps::execute(&settings, &name).await,
            Self::Status { name } => status::execute(&settings, &name).await,
            Self::Interactive => interactive::execute(settings).await,
        }
    }
}
