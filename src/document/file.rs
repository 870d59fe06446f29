// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file reads and atomic writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::trace;

use super::MAX_FILE_SIZE;
use crate::error::DocumentError;

fn read_error(path: &Path, source: std::io::Error) -> DocumentError {
    DocumentError::Read {
        path: path.display().to_string(),
        source,
    }
}

fn write_error(path: &Path, source: std::io::Error) -> DocumentError {
    DocumentError::Write {
        path: path.display().to_string(),
        source,
    }
}

/// Reads the whole file, refusing anything larger than [`MAX_FILE_SIZE`].
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, DocumentError> {
    let size = fs::metadata(path)
        .map_err(|e| read_error(path, e))?
        .len();
    if size > MAX_FILE_SIZE {
        return Err(DocumentError::TooLarge {
            path: path.display().to_string(),
            size,
        });
    }
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    trace!(path = %path.display(), len = bytes.len(), "read file");
    Ok(bytes)
}

/// Replaces `path` with `bytes`.
///
/// The data goes to a temporary file next to the real target and is then
/// renamed over it, so a failed write never truncates an existing file. A
/// symlinked path is resolved first and the link itself is left in place.
/// Read-only targets are refused; permissions of an existing target are
/// carried over.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let target = match fs::metadata(path) {
        Ok(metadata) => {
            if metadata.permissions().readonly() {
                return Err(write_error(
                    path,
                    io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"),
                ));
            }
            fs::canonicalize(path).map_err(|e| write_error(path, e))?
        }
        Err(_) => path.to_path_buf(),
    };
    let parent = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    // Dropping the temp file on any error path removes it
    let mut file = NamedTempFile::new_in(parent).map_err(|e| write_error(path, e))?;
    file.write_all(bytes).map_err(|e| write_error(path, e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| write_error(path, e))?;
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(file.path(), metadata.permissions())
            .map_err(|e| write_error(path, e))?;
    }
    file.persist(&target)
        .map_err(|e| write_error(path, e.error))?;

    trace!(path = %path.display(), target = %target.display(), len = bytes.len(), "wrote file");
    Ok(())
}
