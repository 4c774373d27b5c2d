// src/cli/commands.rs
use clap::Subcommand;

use crate::models::{HashVariant, Theme};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a WordPress bcrypt hash for a password ("-" reads stdin)
    Hash {
        #[arg(required = true)]
        password: String,

        /// bcrypt prefix to emit (2a, 2b or 2y)
        #[arg(long)]
        variant: Option<HashVariant>,
    },

    /// Check a password against an existing bcrypt hash
    Verify {
        #[arg(required = true)]
        password: String,

        #[arg(required = true)]
        hash: String,
    },

    /// Build an SQL statement that sets a user's password hash
    Sql {
        /// WordPress login name
        #[arg(long, short)]
        username: String,

        /// New password ("-" reads stdin)
        #[arg(long, short)]
        password: String,

        /// Table prefix (defaults to wp_)
        #[arg(long)]
        prefix: Option<String>,

        #[arg(long)]
        variant: Option<HashVariant>,
    },

    /// Build a PHP script that resets a password through wp_set_password
    Script {
        /// WordPress user ID
        #[arg(long)]
        user_id: u64,

        /// New password ("-" reads stdin)
        #[arg(long, short)]
        password: String,
    },

    /// Generate a random password
    Generate {
        /// Number of characters
        #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..))]
        length: Option<u16>,

        #[arg(long)]
        no_uppercase: bool,

        #[arg(long)]
        no_lowercase: bool,

        #[arg(long)]
        no_digits: bool,

        #[arg(long)]
        no_symbols: bool,
    },

    /// Rate a password from 0 to 100
    Strength {
        #[arg(required = true)]
        password: String,
    },

    /// Show or change the saved color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Hash each line typed on stdin once typing pauses
    Live,

    /// Copy text to the system clipboard ("-" reads stdin)
    Copy {
        #[arg(required = true)]
        text: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the current theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Save a specific theme
    Set {
        #[arg(required = true)]
        theme: Theme,
    },
}
