use crate::Result;
use lib_config::{Config as LibConfig, Environment, Source};
use log::LevelFilter;
use requester::osu::{PlayMode, API_ENDPOINT};
use serde::Deserialize;
use std::path::PathBuf;

/// Everything comes from `OPI_*` environment variables (or a `.env` file)
#[derive(Deserialize)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Mode of the user and score commands, name or code
    pub mode: String,
    pub log_level: String,
    /// Also write the logs to daily files in here
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix("OPI"))
    }

    pub fn load<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut config = LibConfig::new();

        config.set_default("base_url", API_ENDPOINT)?;
        config.set_default("mode", "osu")?;
        config.set_default("log_level", "info")?;
        config.merge(source)?;

        let res: Self = config.try_into()?;

        if res.api_key.is_empty() {
            return Err("OPI_API_KEY is empty".into());
        }

        Ok(res)
    }

    pub fn play_mode(&self) -> Result<PlayMode> {
        let mode = self.mode.parse::<PlayMode>()?;
        Ok(mode)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("unknown log level `{}`", self.log_level).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_config::{File, FileFormat};

    fn load(json: &'static str) -> Result<Config> {
        Config::load(File::from_str(json, FileFormat::Json))
    }

    #[test]
    fn defaults() {
        let config = load(r#"{ "api_key": "abc" }"#).unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, API_ENDPOINT);
        assert_eq!(config.play_mode().unwrap(), PlayMode::Osu);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides() {
        let config = load(
            r#"{ "api_key": "abc", "mode": "mania", "log_level": "trace", "log_dir": "logs" }"#,
        )
        .unwrap();

        assert_eq!(config.play_mode().unwrap(), PlayMode::Mania);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Trace);
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn key_is_required() {
        assert!(load("{}").is_err());
        assert!(load(r#"{ "api_key": "" }"#).is_err());
    }

    #[test]
    fn bad_values() {
        let config = load(r#"{ "api_key": "abc", "mode": "piano", "log_level": "loud" }"#).unwrap();

        assert!(config.play_mode().is_err());
        assert!(config.level_filter().is_err());
    }
}
