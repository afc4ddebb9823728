use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Deserialize;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "brochure.toml";
pub const MAX_CAROUSEL_INTERVAL_SECS: u64 = 3600;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "brochure", about = "PixelPerfect agency brochure")]
pub struct Cli {
    /// Settings file; defaults to ./brochure.toml, then the user config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Deliver contact submissions to this HTTP endpoint instead of simulating.
    #[arg(long)]
    pub contact_endpoint: Option<String>,
    /// Render every section in its final state without reveal animations.
    #[arg(long)]
    pub no_reveal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub contact_endpoint: Option<String>,
    pub submit_delay_ms: u64,
    pub carousel_interval_secs: u64,
    pub reveal_animations: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            submit_delay_ms: 1500,
            carousel_interval_secs: 6,
            reveal_animations: true,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(endpoint) = &self.contact_endpoint {
            let url = Url::parse(endpoint)
                .with_context(|| format!("contact_endpoint '{endpoint}' is not a valid URL"))?;
            if !matches!(url.scheme(), "http" | "https") {
                bail!("contact_endpoint must use http or https, got '{}'", url.scheme());
            }
        }
        if !(1..=MAX_CAROUSEL_INTERVAL_SECS).contains(&self.carousel_interval_secs) {
            bail!(
                "carousel_interval_secs must be between 1 and {MAX_CAROUSEL_INTERVAL_SECS}, got {}",
                self.carousel_interval_secs
            );
        }
        Ok(())
    }
}

pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let file = match &cli.config {
        Some(path) => Some(path.clone()),
        None => default_config_path(),
    };
    let mut settings = match file {
        Some(path) => read_settings_file(&path)?,
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    apply_cli_overrides(&mut settings, cli);
    settings.validate()?;
    Ok(settings)
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("pixelperfect").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("invalid settings file '{}'", path.display()))
}

fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str::<Settings>(raw)?)
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__CONTACT_ENDPOINT") {
        let v = v.trim();
        settings.contact_endpoint = (!v.is_empty()).then(|| v.to_string());
    }
    if let Some(v) = lookup("APP__SUBMIT_DELAY_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.submit_delay_ms = parsed;
        }
    }
    if let Some(v) = lookup("APP__CAROUSEL_INTERVAL_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.carousel_interval_secs = parsed;
        }
    }
    if let Some(v) = lookup("APP__REVEAL_ANIMATIONS") {
        if let Some(parsed) = parse_flag(&v) {
            settings.reveal_animations = parsed;
        }
    }
    if let Some(v) = lookup("APP__LOG") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }
}

fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(endpoint) = &cli.contact_endpoint {
        settings.contact_endpoint = Some(endpoint.clone());
    }
    if cli.no_reveal {
        settings.reveal_animations = false;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
