use std::{io, path::PathBuf};

use clap::ArgAction;
use records::{Config, Menu};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the loading indicator when adding a student
    #[arg(long)]
    no_loading: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.resolve_config()?;
        Self::session(&config)
    }

    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!(e))?,
            None => Config::default(),
        };
        if self.no_loading {
            config.loading = false;
        }
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    #[instrument(level = "debug")]
    fn session(config: &Config) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut menu = Menu::new(stdin.lock(), io::stdout(), config);
        menu.run()?;
        tracing::info!(records = menu.roster().len(), "session ended");
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the menu transcript, so diagnostics go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
