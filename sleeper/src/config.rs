use crate::command::Command;
use clap::Parser;
use sleeper_core::api::client::DEFAULT_BASE_URL;
use std::path::PathBuf;

/// Book seats on the sleeper bus from the command line
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Where the booking API lives
    #[clap(long, env = "SLEEPER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Where should we store data?
    #[clap(long, env = "SLEEPER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Show failures as desktop notifications as well as on stderr
    #[clap(long)]
    pub desktop_notify: bool,

    /// What to do
    #[clap(subcommand)]
    pub command: Command,
}

impl Config {
    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("", "", "sleeper")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
