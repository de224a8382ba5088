//! Runtime configuration loaded from environment variables.
//!
//! - `STUDYDESK_DATA` - Path to a JSON fixture document (optional)
//! - `RUST_LOG` - Log filter (default: `studydesk=info,sdesk=info`)

use std::path::PathBuf;

pub const DATA_ENV: &str = "STUDYDESK_DATA";
pub const DEFAULT_LOG_FILTER: &str = "studydesk=info,sdesk=info";

const DATA_FILE: &str = "studydesk.json";

#[derive(Clone, Debug)]
pub struct Config {
    /// Fixture file set explicitly via flag or environment.
    pub data_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        let data_path = std::env::var_os(DATA_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self {
            data_path,
            log_filter,
        }
    }

    /// Override the data path, e.g. from a command-line flag.
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.data_path = path;
        }
        self
    }

    /// `<data dir>/studydesk.json` for the current user, if a data directory
    /// can be determined.
    pub fn default_data_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "studydesk").map(|d| d.data_dir().join(DATA_FILE))
    }

    /// The fixture file to load: the explicit path if set, otherwise the
    /// default path when a file exists there. `None` means seed fixtures.
    pub fn resolve_data_path(&self) -> Option<PathBuf> {
        self.data_path
            .clone()
            .or_else(|| Self::default_data_path().filter(|p| p.is_file()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = Config {
            data_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
        .with_data_path(Some(PathBuf::from("/tmp/tasks.json")));

        assert_eq!(
            config.resolve_data_path(),
            Some(PathBuf::from("/tmp/tasks.json"))
        );
    }

    #[test]
    fn test_with_data_path_none_keeps_existing() {
        let config = Config {
            data_path: Some(PathBuf::from("/srv/a.json")),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
        .with_data_path(None);

        assert_eq!(config.data_path, Some(PathBuf::from("/srv/a.json")));
    }
}
