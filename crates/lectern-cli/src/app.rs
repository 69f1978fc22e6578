//! LecternCli application.
//!
//! Resolves the content source, initialises logging, and dispatches
//! commands to their handlers.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lectern_content::{ContentTable, loader, practical_frontend};
use lectern_core::Result;
use lectern_core::traits::ConfigProvider;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::LecternConfig;
use crate::config_handlers;
use crate::deck_handlers::{self, SlidesOptions};

/// CLI application parameterized over a config provider.
pub struct LecternCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
}

impl LecternCli<LecternConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = LecternConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> LecternCli<C> {
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise a level derived from the flags.
    /// `log` records from the library crates are forwarded to the subscriber.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// The content table to operate on.
    ///
    /// `--source` wins over the configured content path; with neither, the
    /// built-in table is used.
    pub fn content(&self, source: Option<&str>) -> Result<Cow<'static, ContentTable>> {
        let path = source.map(PathBuf::from).or_else(|| self.config.content_source());
        match path {
            Some(path) => {
                tracing::debug!("Loading content from {}", path.display());
                Ok(Cow::Owned(loader::load_path(&path)?))
            }
            None => Ok(Cow::Borrowed(practical_frontend())),
        }
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        let source = args.source.as_deref();
        match args.command {
            Some(Command::Topics) => deck_handlers::handle_topics(&*self.content(source)?),
            Some(Command::Slides { topic, plain, json }) => {
                let options = SlidesOptions {
                    plain: plain || (!json && self.config.plain_output()),
                    json,
                };
                deck_handlers::handle_slides(&*self.content(source)?, &topic, options)
            }
            Some(Command::Export { output }) => {
                let output = output.as_deref().map(Path::new);
                deck_handlers::handle_export(&*self.content(source)?, output)
            }
            Some(Command::Validate { path }) => deck_handlers::handle_validate(Path::new(&path)),
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!(
                    "{} {} ({}); use --help for usage",
                    self.name,
                    self.version,
                    self.config.project_name()
                );
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
