//
//  shopsavvy
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Low-level helpers used by [`Config`](super::Config) to read and write the
//! TOML file.
//!
//! ## Notes
//!
//! - Write operations create parent directories
//! - On unix the file holds an API key, so it is written owner-only (`0600`)
//! - Read operations return the raw file content as a `String`

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Fails if the file does not exist, cannot be opened, or is not UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes content to a configuration file, creating parent directories.
///
/// Overwrites an existing file. On unix the file ends up with mode `0600`,
/// including a file that already existed with looser permissions.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    write_private(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    use std::fs::{OpenOptions, Permissions};
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation
    file.set_permissions(Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}

/// Checks if a configuration file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
