use serde::Deserialize;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    pub database_url: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MediaConfig {
    /// Root prefix for computed image storage paths, e.g. "images".
    pub upload_root: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    pub media: MediaConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        // .env may carry DATABASE_URL for local runs; missing file is fine.
        let _ = dotenvy::dotenv();

        let contents = fs::read_to_string(config_path)?;
        let mut config: Config = serde_yml::from_str(&contents)?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.common.database_url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_yaml() {
        let yaml = r#"
common:
  project_name: bookshop
  database_url: "sqlite::memory:"
  log_level: debug
media:
  upload_root: images
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.common.project_name, "bookshop");
        assert_eq!(config.common.database_url, "sqlite::memory:");
        assert_eq!(config.media.upload_root, "images");
    }
}
