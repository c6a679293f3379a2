use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{ConfigError, TransportError};
use crate::services::metadata_service::{MetadataLoader, METADATA_FILE};
use crate::services::text_reader::TextReader;
use crate::services::transport::SchemeTransport;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: Url,
    pub metadata_file: String,
    /// `None` blocks until the transfer finishes.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Reads `METADATA_BASE_URL`, `METADATA_FILE` and `METADATA_TIMEOUT_SECS`
    /// from the environment. `main` loads `.env` before calling this.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(
            env::var("METADATA_BASE_URL").ok(),
            env::var("METADATA_FILE").ok(),
            env::var("METADATA_TIMEOUT_SECS").ok(),
        )
    }

    pub fn from_vars(
        base_url: Option<String>,
        metadata_file: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Config, ConfigError> {
        let base_url = match base_url {
            Some(value) => parse_base_url(&value)?,
            None => working_dir_url()?,
        };

        let timeout = match timeout_secs {
            Some(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Timeout(value.clone()))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            base_url,
            metadata_file: metadata_file.unwrap_or_else(|| METADATA_FILE.to_string()),
            timeout,
        })
    }

    pub fn loader(&self) -> Result<MetadataLoader<SchemeTransport>, TransportError> {
        let transport = SchemeTransport::new(self.timeout)?;
        let reader = TextReader::new(self.base_url.clone(), transport);
        Ok(MetadataLoader::new(reader).with_file(self.metadata_file.clone()))
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|source| ConfigError::BaseUrl {
        value: value.to_string(),
        source,
    })?;
    // Without a trailing slash, `Url::join` would replace the last segment.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn working_dir_url() -> Result<Url, ConfigError> {
    let cwd = env::current_dir().map_err(|e| ConfigError::WorkingDir(e.to_string()))?;
    Url::from_directory_path(&cwd).map_err(|_| ConfigError::WorkingDir(cwd.display().to_string()))
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn defaults_to_working_directory_and_metadata_json() {
        let config = Config::from_vars(None, None, None).unwrap();
        assert_eq!(config.base_url.scheme(), "file");
        assert!(config.base_url.path().ends_with('/'));
        assert_eq!(config.metadata_file, METADATA_FILE);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config =
            Config::from_vars(Some("http://localhost:8000/tiles".to_string()), None, None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/tiles/");
        assert_eq!(
            config.base_url.join("metadata.json").unwrap().as_str(),
            "http://localhost:8000/tiles/metadata.json"
        );
    }

    #[test]
    fn trailing_slash_goes_on_the_path_not_the_query() {
        let config =
            Config::from_vars(Some("http://h/tiles?x=1".to_string()), None, None).unwrap();
        assert_eq!(config.base_url.path(), "/tiles/");
        assert_eq!(config.base_url.query(), Some("x=1"));
        assert_eq!(
            config.base_url.join("metadata.json").unwrap().as_str(),
            "http://h/tiles/metadata.json"
        );
    }

    #[test]
    fn parses_timeout_and_file() {
        let config = Config::from_vars(
            Some("http://localhost/".to_string()),
            Some("tilemap.json".to_string()),
            Some(" 15 ".to_string()),
        )
        .unwrap();
        assert_eq!(config.metadata_file, "tilemap.json");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_vars(Some("not a url".to_string()), None, None),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            Config::from_vars(None, None, Some("soon".to_string())),
            Err(ConfigError::Timeout(_))
        ));
    }

    #[test]
    fn builds_a_loader_for_the_configured_file() {
        let config = Config::from_vars(
            Some("http://localhost/".to_string()),
            Some("tilemap.json".to_string()),
            None,
        )
        .unwrap();
        let loader = config.loader().unwrap();
        assert_eq!(loader.file(), "tilemap.json");
    }
}
