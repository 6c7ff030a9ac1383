//! Stable identifier derived from a canonical directory path.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// SHA-256 of a directory path, used as the registry key and note file stem.
///
/// Callers canonicalize first so that one directory reached through
/// different symlinks maps to one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathHash {
    hex: String,
}

/// A stored hash that is not 64 hex characters.
#[derive(Debug, Error)]
#[error("malformed path hash '{0}': expected 64 hex characters")]
pub struct PathHashError(String);

impl PathHash {
    pub const LEN: usize = 64;

    /// Hashes the raw bytes of `path`, so paths that are not valid UTF-8 keep
    /// distinct identifiers.
    pub fn of_path(path: &Path) -> Self {
        let digest = Sha256::digest(path.as_os_str().as_encoded_bytes());
        Self {
            hex: format!("{:x}", digest),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Note file name for this hash, e.g. `<hex>.org`.
    pub fn file_name(&self, ext: &str) -> String {
        format!("{}.{}", self.hex, ext)
    }
}

impl fmt::Display for PathHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

impl FromStr for PathHash {
    type Err = PathHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PathHashError(s.to_string()));
        }
        Ok(Self {
            hex: s.to_ascii_lowercase(),
        })
    }
}

impl Serialize for PathHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for PathHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
