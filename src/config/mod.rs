use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub cache: CacheConfig,
    pub upstream: UpstreamConfig,
    pub playlist: PlaylistConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub file_path: PathBuf,
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistConfig {
    pub epg_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            cache: CacheConfig {
                file_path: PathBuf::from("./cache/bestv_channels.json"),
                ttl_seconds: 60,
            },
            upstream: UpstreamConfig {
                url: "https://bp-api.bestv.cn/cms/api/live/channels".to_string(),
                timeout_seconds: 5,
            },
            playlist: PlaylistConfig {
                epg_url: "https://epg.iill.top/e.xml".to_string(),
            },
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_file, contents)?;
            Ok(default_config)
        }
    }
}
