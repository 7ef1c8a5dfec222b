use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::event::HeadlessOptions;

#[derive(Debug, Parser)]
#[command(name = "multiverse", version, about = "Rick and Morty API explorer")]
pub struct CliArgs {
    /// Load everything, print a summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the rendered page as static HTML and exit
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the log file used by the interactive UI
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("API_BASE_URL", url);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn wants_headless(&self) -> bool {
        self.headless || self.json || self.html.is_some()
    }

    pub fn headless_options(&self) -> HeadlessOptions {
        HeadlessOptions {
            json: self.json,
            html: self.html.clone(),
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
