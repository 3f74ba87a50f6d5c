use crate::config::settings::Settings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "wordtone")]
#[command(about = "Send synonyms, antonyms and derived audio parameters of a word over OSC")]
pub struct CliConfig {
    /// Seed word to look up
    pub keyword: String,

    /// OSC receiver host [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// OSC receiver port [default: 6449]
    #[arg(long)]
    pub port: Option<u16>,

    /// Maximum words per relation [default: 8]
    #[arg(long)]
    pub max: Option<usize>,

    /// Word-association endpoint [default: https://api.datamuse.com/words]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// HTTP request timeout in seconds [default: 10]
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Pause after /clear in milliseconds [default: 50]
    #[arg(long)]
    pub clear_delay_ms: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fetch and compute, but log messages instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve flags, the optional config file and defaults into [`Settings`].
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = Settings::new(self.keyword);

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path);
            settings.apply_toml(&TomlConfig::from_file(path)?);
        }

        // 命令列參數優先於設定檔
        if let Some(endpoint) = self.endpoint {
            settings.endpoint = endpoint;
        }
        if let Some(max) = self.max {
            settings.max_results = max;
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout = Duration::from_secs(secs);
        }
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(ms) = self.clear_delay_ms {
            settings.clear_delay = Duration::from_millis(ms);
        }
        settings.dry_run = self.dry_run;

        Ok(settings)
    }
}
