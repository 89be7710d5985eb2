use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::PoseThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub pose: PoseSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub alignment: AlignmentSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct PoseSettings {
    #[serde(default = "default_max_tilt_degrees")]
    pub max_tilt_degrees: f64,
    #[serde(default = "default_left_percent")]
    pub left_percent: f64,
    #[serde(default = "default_right_percent")]
    pub right_percent: f64,
}

impl Default for PoseSettings {
    fn default() -> Self {
        Self {
            max_tilt_degrees: default_max_tilt_degrees(),
            left_percent: default_left_percent(),
            right_percent: default_right_percent(),
        }
    }
}

impl PoseSettings {
    pub fn thresholds(&self) -> PoseThresholds {
        PoseThresholds {
            max_tilt_degrees: self.max_tilt_degrees,
            left_percent: self.left_percent,
            right_percent: self.right_percent,
        }
    }
}

fn default_max_tilt_degrees() -> f64 { 15.0 }
fn default_left_percent() -> f64 { 33.333 }
fn default_right_percent() -> f64 { 66.666 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_podium_tiers")]
    pub podium_tiers: usize,
    /// Most distinct ids the scoreboard holds
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            podium_tiers: default_podium_tiers(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_podium_tiers() -> usize { 3 }
fn default_max_entries() -> usize { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentSettings {
    #[serde(default = "default_required_frames")]
    pub required_frames: u32,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for AlignmentSettings {
    fn default() -> Self {
        Self {
            required_frames: default_required_frames(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl AlignmentSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

fn default_required_frames() -> u32 { 3 }
fn default_tick_ms() -> u64 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Defaults on the structs
    /// 2. config/default.toml
    /// 3. config/local.toml
    /// 4. Environment variables prefixed with CHAMCHAM
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CHAMCHAM__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CHAMCHAM")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
