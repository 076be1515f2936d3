use std::{io, path::PathBuf};

mod add_book;
mod console;
mod rent_book;
mod report;
mod return_book;
mod search;
mod session;
mod terminal;

use clap::ArgAction;
use console::Console;
use library::Config;
use session::Session;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Price charged per rental day (overrides the configuration file)
    #[arg(long, value_name = "PRICE")]
    daily_rate: Option<u32>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.load_config()?;
        tracing::debug!(?config, "configuration loaded");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console =
            Console::new(stdin.lock(), stdout.lock()).with_colour(terminal::supports_color());

        Session::new(&config).run(&mut console)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(match self.daily_rate {
            Some(rate) => config.with_daily_rate(rate),
            None => config,
        })
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

        // stdout carries the console dialogue, so logs go to stderr
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
