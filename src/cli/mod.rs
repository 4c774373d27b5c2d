// src/cli/mod.rs
use clap::Parser;

use crate::models::Theme;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Copy the main result to the system clipboard
    #[arg(long, global = true)]
    pub copy: bool,

    /// Use this theme for this run without saving it
    #[arg(long = "theme", global = true, value_name = "light|dark")]
    pub theme_override: Option<Theme>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::ThemeAction;
    use crate::models::HashVariant;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_sql_with_default_prefix() {
        let args = Args::parse_from(["wp-passtool", "sql", "-u", "admin", "-p", "secret"]);
        match args.command {
            Some(CliCommand::Sql { username, password, prefix, variant }) => {
                assert_eq!(username, "admin");
                assert_eq!(password, "secret");
                assert_eq!(prefix, None);
                assert_eq!(variant, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_generate_toggles_and_globals() {
        let args = Args::parse_from([
            "wp-passtool", "generate", "--length", "24", "--no-symbols", "--json", "--theme", "light",
        ]);
        assert!(args.json);
        assert_eq!(args.theme_override, Some(Theme::Light));
        match args.command {
            Some(CliCommand::Generate { length, no_uppercase, no_lowercase, no_digits, no_symbols }) => {
                assert_eq!(length, Some(24));
                assert!(!no_uppercase && !no_lowercase && !no_digits);
                assert!(no_symbols);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_hash_variant_and_theme_action() {
        let args = Args::parse_from(["wp-passtool", "hash", "pw", "--variant", "2b"]);
        assert!(matches!(
            args.command,
            Some(CliCommand::Hash { variant: Some(HashVariant::TwoB), .. })
        ));

        let args = Args::parse_from(["wp-passtool", "theme", "set", "light"]);
        assert!(matches!(
            args.command,
            Some(CliCommand::Theme { action: Some(ThemeAction::Set { theme: Theme::Light }) })
        ));
    }

    #[test]
    fn rejects_zero_length() {
        assert!(Args::try_parse_from(["wp-passtool", "generate", "--length", "0"]).is_err());
    }
}
