use clap::{Parser, ValueEnum};
use engine_logging::LogDestination;
use hn_engine::DEFAULT_API_BASE;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "hn_app")]
#[command(about = "Serve the current top linked Hacker News stories")]
#[command(version)]
pub struct Cli {
    /// The port to start the web server on
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// The number of top stories to display
    #[arg(long, default_value_t = 30)]
    pub num_stories: usize,

    /// Base URL of the item API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log per-item failures and worker activity
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
