//! Persistence DTOs for the config document.
//!
//! Decouples the on-disk JSON shape from the domain model so that
//! deserialization can't bypass the invariants `Entry` enforces. On disk
//! an entry is `source` plus at most one of `destHost`/`destFolder`; the
//! conversion to the domain `Destination` variant is where files with
//! both or neither set are rejected.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Destination, DomainName, Entry};

use super::{Config, ConfigError};

/// Serializable representation of the whole config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDto {
    pub addr: String,
    pub tld: String,
    #[serde(default)]
    pub entries: Vec<EntryDto>,
}

/// Serializable representation of one mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDto {
    pub source: String,

    #[serde(
        rename = "destHost",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dest_host: Option<String>,

    #[serde(
        rename = "destFolder",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dest_folder: Option<String>,
}

impl From<&Config> for ConfigDto {
    fn from(config: &Config) -> Self {
        Self {
            addr: config.addr.clone(),
            tld: config.tld.clone(),
            entries: config.entries.iter().map(EntryDto::from).collect(),
        }
    }
}

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        let (dest_host, dest_folder) = match &entry.destination {
            Destination::Host(host) => (Some(host.clone()), None),
            Destination::Folder(path) => (None, Some(path.display().to_string())),
        };
        Self {
            source: entry.source.as_str().to_string(),
            dest_host,
            dest_folder,
        }
    }
}

impl TryFrom<EntryDto> for Entry {
    type Error = ConfigError;

    fn try_from(dto: EntryDto) -> Result<Self, ConfigError> {
        let source = DomainName::new(&dto.source)?;

        let destination = match (dto.dest_host, dto.dest_folder) {
            (Some(host), None) => Destination::Host(host),
            // Stored folder paths are trusted as already resolved;
            // re-validating existence here would make an entry whose
            // folder was deleted unloadable.
            (None, Some(folder)) => Destination::Folder(PathBuf::from(folder)),
            (Some(_), Some(_)) => return Err(ConfigError::BothDestinations(dto.source)),
            (None, None) => return Err(ConfigError::NoDestination(dto.source)),
        };

        Ok(Entry::new(source, destination))
    }
}
