mod dto;

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::domain::{DomainNameError, Entry};
use crate::infrastructure::paths::ConfigLocation;

pub use dto::{ConfigDto, EntryDto};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_ADDR: &str = ":7999";
pub const DEFAULT_TLD: &str = "test";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied for {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid source domain in config file: {0}")]
    InvalidSource(#[from] DomainNameError),

    #[error("Entry for '{0}' has both destHost and destFolder set")]
    BothDestinations(String),

    #[error("Entry for '{0}' has no destination")]
    NoDestination(String),

    #[error("Duplicate entry for '{0}' in config file")]
    DuplicateSource(String),
}

/// The persisted root object: the bind address and default TLD consumed
/// by the serving process, and the ordered mapping entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: String,
    pub tld: String,
    pub entries: Vec<Entry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            tld: DEFAULT_TLD.to_string(),
            entries: Vec::new(),
        }
    }
}

impl TryFrom<ConfigDto> for Config {
    type Error = ConfigError;

    fn try_from(dto: ConfigDto) -> Result<Self, ConfigError> {
        // Duplicate sources can only come from manual file edits; the
        // editor never produces them. Reject rather than guess which
        // entry the user meant.
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(dto.entries.len());
        for entry_dto in dto.entries {
            if !seen.insert(entry_dto.source.clone()) {
                return Err(ConfigError::DuplicateSource(entry_dto.source));
            }
            entries.push(Entry::try_from(entry_dto)?);
        }

        Ok(Self {
            addr: dto.addr,
            tld: dto.tld,
            entries,
        })
    }
}

/// Serialize a config in the on-disk format: pretty-printed JSON with
/// two-space indentation.
pub fn canonical_json(config: &Config) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(&ConfigDto::from(config))?)
}

/// Resolves, initializes, loads, and persists the config file under an
/// injected root directory. Each CLI invocation constructs one store and
/// runs a single load → mutate → save cycle through it.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default root directory: `~/.waypost`.
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".waypost")
    }

    /// Resolve the config file location without touching the filesystem
    /// beyond an existence check. Callable before the file exists.
    pub fn resolve_path(&self) -> ConfigLocation {
        let file = self.root.join(CONFIG_FILE_NAME);
        ConfigLocation {
            exists: file.exists(),
            dir: self.root.clone(),
            file,
        }
    }

    /// Create the config file with defaults if it doesn't exist yet.
    /// A second call is a no-op.
    pub fn ensure(&self) -> Result<(), ConfigError> {
        let location = self.resolve_path();
        if location.exists {
            return Ok(());
        }

        fs::create_dir_all(&location.dir).map_err(|e| classify_io(&location.dir, e))?;
        self.write_config(&Config::default())?;
        debug!("created config file at {}", location.file.display());
        Ok(())
    }

    /// Guarantee the file exists, then load it.
    pub fn ensure_and_load(&self) -> Result<Config, ConfigError> {
        self.ensure()?;
        self.load()
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        let location = self.resolve_path();
        let content =
            fs::read_to_string(&location.file).map_err(|e| classify_io(&location.file, e))?;
        let dto: ConfigDto = serde_json::from_str(&content)?;
        Config::try_from(dto)
    }

    /// Replace the config file with the given config, all-or-nothing:
    /// the document is written to a temp file in the same directory and
    /// renamed into place, so a failed write leaves the old file intact.
    pub fn write_config(&self, config: &Config) -> Result<(), ConfigError> {
        let location = self.resolve_path();
        let body = canonical_json(config)?;

        let mut tmp =
            NamedTempFile::new_in(&location.dir).map_err(|e| classify_io(&location.dir, e))?;
        tmp.write_all(body.as_bytes())
            .map_err(|e| classify_io(&location.file, e))?;
        tmp.write_all(b"\n")
            .map_err(|e| classify_io(&location.file, e))?;
        tmp.persist(&location.file)
            .map_err(|e| classify_io(&location.file, e.error))?;

        debug!(
            "wrote {} entries to {}",
            config.entries.len(),
            location.file.display()
        );
        Ok(())
    }
}

fn classify_io(path: &Path, source: io::Error) -> ConfigError {
    let path = path.to_path_buf();
    if source.kind() == io::ErrorKind::PermissionDenied {
        ConfigError::PermissionDenied { path, source }
    } else {
        ConfigError::Io { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denials_are_distinguished_from_other_io_errors() {
        let path = Path::new("/tmp/config.json");

        let denied = classify_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, ConfigError::PermissionDenied { .. }));

        let missing = classify_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.addr, ":7999");
        assert_eq!(config.tld, "test");
        assert!(config.entries.is_empty());
    }

    #[test]
    fn test_duplicate_sources_rejected_on_conversion() {
        let dto = ConfigDto {
            addr: DEFAULT_ADDR.to_string(),
            tld: DEFAULT_TLD.to_string(),
            entries: vec![
                EntryDto {
                    source: "a.test".to_string(),
                    dest_host: Some("localhost:8080".to_string()),
                    dest_folder: None,
                },
                EntryDto {
                    source: "a.test".to_string(),
                    dest_host: Some("localhost:9090".to_string()),
                    dest_folder: None,
                },
            ],
        };
        assert!(matches!(
            Config::try_from(dto),
            Err(ConfigError::DuplicateSource(_))
        ));
    }
}
