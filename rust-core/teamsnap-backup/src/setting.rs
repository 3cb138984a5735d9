// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! The `backup_cache` setting and where it points.
//!
//! In configuration the setting is either a boolean or a path:
//!
//! ```toml
//! backup_cache = true                    # default location
//! backup_cache = false                   # disabled
//! backup_cache = "./var/teamsnap.json"   # explicit location
//! ```
//!
//! Leaving it unset means enabled at the default location.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Location used when backup is enabled without an explicit path.
pub const DEFAULT_BACKUP_PATH: &str = "./tmp/.teamsnap_backup";

/// Whether and where the discovery snapshot is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSetting", into = "RawSetting")]
pub enum BackupCache {
    /// No cache file is read or written.
    Disabled,
    /// Cache at [`DEFAULT_BACKUP_PATH`].
    #[default]
    Default,
    /// Cache at an explicit location.
    Path(PathBuf),
}

impl BackupCache {
    /// Returns `true` unless the cache is disabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, BackupCache::Disabled)
    }
}

impl From<bool> for BackupCache {
    fn from(enabled: bool) -> Self {
        if enabled {
            BackupCache::Default
        } else {
            BackupCache::Disabled
        }
    }
}

impl From<PathBuf> for BackupCache {
    fn from(path: PathBuf) -> Self {
        BackupCache::Path(path)
    }
}

impl FromStr for BackupCache {
    type Err = Infallible;

    /// `"true"`/`"false"` (any case) select the flag forms; anything else is a
    /// path.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "true" => BackupCache::Default,
            "false" => BackupCache::Disabled,
            _ => BackupCache::Path(PathBuf::from(trimmed)),
        })
    }
}

/// Wire form: `true`, `false`, or a path string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSetting {
    Flag(bool),
    Path(PathBuf),
}

impl From<RawSetting> for BackupCache {
    fn from(raw: RawSetting) -> Self {
        match raw {
            RawSetting::Flag(enabled) => enabled.into(),
            RawSetting::Path(path) => BackupCache::Path(path),
        }
    }
}

impl From<BackupCache> for RawSetting {
    fn from(setting: BackupCache) -> Self {
        match setting {
            BackupCache::Disabled => RawSetting::Flag(false),
            BackupCache::Default => RawSetting::Flag(true),
            BackupCache::Path(path) => RawSetting::Path(path),
        }
    }
}

/// Resolve a setting to the file it designates, or `None` when disabled.
pub fn resolve_backup_path(setting: &BackupCache) -> Option<PathBuf> {
    match setting {
        BackupCache::Disabled => None,
        BackupCache::Default => Some(Path::new(DEFAULT_BACKUP_PATH).to_path_buf()),
        BackupCache::Path(path) => Some(path.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path() {
        let location = "./some_dir/some_file.testing";
        let setting = BackupCache::Path(PathBuf::from(location));
        assert_eq!(resolve_backup_path(&setting), Some(PathBuf::from(location)));
    }

    #[test]
    fn test_unset_uses_default() {
        assert_eq!(
            resolve_backup_path(&BackupCache::default()),
            Some(PathBuf::from(DEFAULT_BACKUP_PATH))
        );
    }

    #[test]
    fn test_true_uses_default() {
        assert_eq!(
            resolve_backup_path(&BackupCache::from(true)),
            Some(PathBuf::from(DEFAULT_BACKUP_PATH))
        );
    }

    #[test]
    fn test_disabled() {
        assert_eq!(resolve_backup_path(&BackupCache::from(false)), None);
        assert!(!BackupCache::Disabled.is_enabled());
    }

    #[test]
    fn test_deserialize_flag_or_path() {
        let flag: BackupCache = serde_json::from_str("false").unwrap();
        assert_eq!(flag, BackupCache::Disabled);
        let flag: BackupCache = serde_json::from_str("true").unwrap();
        assert_eq!(flag, BackupCache::Default);
        let path: BackupCache = serde_json::from_str(r#""./cache.json""#).unwrap();
        assert_eq!(path, BackupCache::Path(PathBuf::from("./cache.json")));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("TRUE".parse::<BackupCache>().unwrap(), BackupCache::Default);
        assert_eq!("false".parse::<BackupCache>().unwrap(), BackupCache::Disabled);
        assert_eq!(
            " ./x/y ".parse::<BackupCache>().unwrap(),
            BackupCache::Path(PathBuf::from("./x/y"))
        );
    }
}
