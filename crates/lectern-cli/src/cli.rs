//! CLI argument parsing and command definitions.
//!
//! Global flags select the configuration file, the content source, and
//! verbosity. Commands inspect, export, or validate content tables, or
//! manage the configuration file.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "LECTERN_CONFIG")]
    pub config: Option<String>,

    /// Content file or directory (overrides `content.path`).
    #[arg(short, long)]
    pub source: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List topics with their slide counts.
    Topics,

    /// Print the slides of one topic in presentation order.
    Slides {
        /// Topic key (e.g., "intro").
        topic: String,

        /// Strip inline markup from slide text.
        #[arg(long)]
        plain: bool,

        /// Print the slides as JSON.
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Export the whole content table as JSON.
    Export {
        /// Output file path (defaults to stdout).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Load and validate a content file or directory.
    Validate {
        /// File or directory to check.
        path: String,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "content.path").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "content.path").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["test"]);
        assert!(args.source.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_verbose_quiet() {
        let args = CliArgs::parse_from(["test", "--verbose"]);
        assert!(args.verbose);
        let args = CliArgs::parse_from(["test", "-q"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_args_config_and_source() {
        let args = CliArgs::parse_from([
            "test",
            "--config",
            "/path/to/config.toml",
            "--source",
            "/decks",
        ]);
        assert_eq!(args.config, Some("/path/to/config.toml".to_string()));
        assert_eq!(args.source, Some("/decks".to_string()));
    }

    #[test]
    fn test_topics_command() {
        let args = CliArgs::parse_from(["test", "topics"]);
        assert!(matches!(args.command, Some(Command::Topics)));
    }

    #[test]
    fn test_slides_command() {
        let args = CliArgs::parse_from(["test", "slides", "intro"]);
        match args.command {
            Some(Command::Slides { topic, plain, json }) => {
                assert_eq!(topic, "intro");
                assert!(!plain);
                assert!(!json);
            }
            _ => panic!("Expected Slides command"),
        }
    }

    #[test]
    fn test_slides_command_plain() {
        let args = CliArgs::parse_from(["test", "slides", "modals", "--plain"]);
        match args.command {
            Some(Command::Slides { plain, json, .. }) => {
                assert!(plain);
                assert!(!json);
            }
            _ => panic!("Expected Slides command with plain"),
        }
    }

    #[test]
    fn test_slides_plain_conflicts_with_json() {
        let result = CliArgs::try_parse_from(["test", "slides", "intro", "--plain", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_slides_requires_topic() {
        assert!(CliArgs::try_parse_from(["test", "slides"]).is_err());
    }

    #[test]
    fn test_export_command() {
        let args = CliArgs::parse_from(["test", "export", "--output", "deck.json"]);
        match args.command {
            Some(Command::Export { output }) => assert_eq!(output, Some("deck.json".into())),
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_validate_command() {
        let args = CliArgs::parse_from(["test", "validate", "./decks"]);
        match args.command {
            Some(Command::Validate { path }) => assert_eq!(path, "./decks"),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["test", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }

    // ------------------------------------------------------------------------
    // Config command tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_path_command() {
        let args = CliArgs::parse_from(["test", "config", "path"]);
        assert!(matches!(
            args.command,
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Path
            }))
        ));
    }

    #[test]
    fn test_config_set_command() {
        let args = CliArgs::parse_from(["test", "config", "set", "content.path", "/decks"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Set { key, value },
            })) => {
                assert_eq!(key, "content.path");
                assert_eq!(value, "/decks");
            }
            _ => panic!("Expected Config Set command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let args = CliArgs::parse_from(["test", "config", "init", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command with force"),
        }
    }

    #[test]
    fn test_config_export_docker_env() {
        let args = CliArgs::parse_from(["test", "config", "export", "--docker-env"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Export { docker_env },
            })) => assert!(docker_env),
            _ => panic!("Expected Config Export command with docker_env"),
        }
    }
}
