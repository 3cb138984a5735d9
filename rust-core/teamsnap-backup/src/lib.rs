// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! # teamsnap-backup
//!
//! Persists the last successfully discovered set of collection documents so a
//! client can start when the API cannot be reached.
//!
//! - [`setting`] -- The `backup_cache` flag-or-path setting and
//!   [`resolve_backup_path`].
//! - [`file`] -- [`save_backup`], [`load_backup`], [`backup_exists`].
//! - [`error`] -- [`BackupError`].
//!
//! Snapshots are generic over `serde`, so this crate does not depend on the
//! document model it stores.

pub mod error;
pub mod file;
pub mod setting;

pub use error::{BackupError, Result};
pub use file::{backup_exists, load_backup, save_backup, BackupWrite};
pub use setting::{resolve_backup_path, BackupCache, DEFAULT_BACKUP_PATH};
