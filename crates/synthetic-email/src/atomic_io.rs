//! Atomic export file writes.
//!
//! Exports are written to a hidden temporary file in the target directory
//! and then renamed over the target, so an interrupted or failed export
//! never leaves a half-written file behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir` atomically.
///
/// `file_name` must be a single normal path component; the directory
/// capability decides where the file lands.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the file cannot be written or renamed.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    contents: &str,
) -> Result<(), ExportError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(name)), None) = (components.next(), components.next()) else {
        return Err(ExportError::Write {
            path: file_name.to_path_buf(),
            message: "export path must be a file name".to_owned(),
        });
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{name}.tmp.{}.{suffix}.{counter}", std::process::id());

    write_to_temp_file(dir, &tmp_name, file_name, contents)?;
    rename_temp_to_target(dir, &tmp_name, name, file_name)?;
    sync_directory(dir);

    Ok(())
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target_path: &Utf8Path,
    contents: &str,
) -> Result<(), ExportError> {
    let tmp_path = target_path.with_file_name(tmp_name);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| ExportError::Write {
            path: tmp_path.clone(),
            message: err.to_string(),
        })?;

    if let Err(err) = file.write_all(contents.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(ExportError::Write {
            path: tmp_path,
            message: err.to_string(),
        });
    }

    Ok(())
}

fn rename_temp_to_target(
    dir: &Dir,
    tmp_name: &str,
    target_name: &str,
    target_path: &Utf8Path,
) -> Result<(), ExportError> {
    if let Err(err) = rename_temp_to_target_impl(dir, tmp_name, target_name) {
        drop(dir.remove_file(tmp_name));
        return Err(ExportError::Write {
            path: target_path.to_path_buf(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // An existing export must be removed before the rename can replace it.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

/// Flushes the directory entry for the renamed export. The export is already
/// in place, so a failure is only logged.
fn sync_directory(dir: &Dir) {
    if let Err(err) = dir.open(".").and_then(|handle| handle.sync_all()) {
        debug!(error = %err, "export directory sync failed");
    }
}
