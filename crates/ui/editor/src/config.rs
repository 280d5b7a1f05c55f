use std::{env, path::PathBuf, time::Duration};

use catalog::{ApiConfig, client::DEFAULT_BASE_URL};
use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::debug;

use crate::{cli::Cli, core::state::StandardChangePolicy};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    /// Whole-request timeout; 0 disables it.
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FormSettings {
    pub standard_change: StandardChangePolicy,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    pub api: ApiSettings,
    pub form: FormSettings,
    pub tick_rate: f64,
    pub frame_rate: f64,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref API_URL_ENV: String = format!("{}_API_URL", PROJECT_NAME.clone());
}

impl Config {
    /// Layered load: defaults, config files, environment, command line.
    pub fn new(cli: &Cli) -> Result<Self, config::ConfigError> {
        Self::load(get_config_dir(), get_data_dir(), env::var(API_URL_ENV.as_str()).ok(), cli)
    }

    fn load(
        config_dir: PathBuf,
        data_dir: PathBuf,
        env_base_url: Option<String>,
        cli: &Cli,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("config_dir", config_dir.to_string_lossy().as_ref())?
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", 10)?
            .set_default("form.standard_change", StandardChangePolicy::default().to_string())?
            .set_default("tick_rate", 4.0)?
            .set_default("frame_rate", 30.0)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                debug!("reading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let cfg: Self = builder
            .set_override_option("api.base_url", env_base_url)?
            .set_override_option("api.base_url", cli.base_url.clone())?
            .set_override_option("tick_rate", cli.tick_rate)?
            .set_override_option("frame_rate", cli.frame_rate)?
            .build()?
            .try_deserialize()?;
        for (name, rate) in [("tick_rate", cfg.tick_rate), ("frame_rate", cfg.frame_rate)] {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(config::ConfigError::Message(format!(
                    "{name} must be a positive number of events per second, got {rate}"
                )));
            }
        }
        Ok(cfg)
    }

    pub fn api_config(&self) -> ApiConfig {
        let config = ApiConfig::new(self.api.base_url.clone());
        match self.api.timeout_secs {
            0 => config,
            secs => config.timeout(Duration::from_secs(secs)),
        }
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "catalog", env!("CARGO_PKG_NAME"))
}
