use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::{
    BoardOptions, GridOptions, cmd_board, cmd_config_get, cmd_config_set, cmd_config_show,
    cmd_grid, cmd_prefs_get, cmd_prefs_set, cmd_prefs_show, cmd_users,
};
use crate::types::{Grouping, Ordering};

#[derive(Parser)]
#[command(name = "ticketboard")]
#[command(about = "Terminal kanban board for a remote ticket feed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive board (default)
    #[command(visible_alias = "b")]
    Board {
        /// Read tickets from a local JSON file instead of the endpoint
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Do not persist grouping/ordering changes made in this session
        #[arg(long)]
        no_save: bool,
    },

    /// Print the grouped and ordered board once
    Grid {
        /// Read tickets from a local JSON file instead of the endpoint
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Grouping for this run: status, priority, user (not saved)
        #[arg(short, long, value_parser = parse_grouping)]
        group_by: Option<Grouping>,

        /// Ordering for this run: priority, title (not saved)
        #[arg(short, long, value_parser = parse_ordering)]
        order_by: Option<Ordering>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List users from the ticket feed
    Users {
        /// Read users from a local JSON file instead of the endpoint
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change the saved grouping and ordering
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show saved preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a saved preference
    Get {
        /// Preference key (grouping, ordering)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a preference
    Set {
        /// Preference key (grouping, ordering)
        key: String,
        /// Value to save
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (endpoint, timeout, connect_timeout)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (endpoint, timeout, connect_timeout)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Whether the chosen command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Board { .. }))
    }

    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        match self.command {
            None => cmd_board(BoardOptions::default()).await,

            Some(Commands::Board { file, no_save }) => {
                cmd_board(BoardOptions { file, no_save }).await
            }

            Some(Commands::Grid {
                file,
                group_by,
                order_by,
                json,
            }) => {
                cmd_grid(GridOptions {
                    file,
                    group_by,
                    order_by,
                    json,
                })
                .await
            }

            Some(Commands::Users { file, json }) => cmd_users(file.as_deref(), json).await,

            Some(Commands::Prefs { action }) => match action {
                PrefsAction::Show { json } => cmd_prefs_show(json),
                PrefsAction::Get { key, json } => cmd_prefs_get(&key, json),
                PrefsAction::Set { key, value, json } => cmd_prefs_set(&key, &value, json),
            },

            Some(Commands::Config { action }) => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Some(Commands::Completions { shell }) => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_grouping(s: &str) -> Result<Grouping, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "grouping",
        Grouping::ALL_STRINGS,
    )
}

fn parse_ordering(s: &str) -> Result<Ordering, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "ordering",
        Ordering::ALL_STRINGS,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "ticketboard", &mut io::stdout());
}
