//! Reading and writing `shortcuts.vdf` files.
//!
//! Saves never write the target in place:
//! 1. Encode the whole collection in memory
//! 2. Write to a temp file with a unique PID+TID suffix
//! 3. `sync_all` so the data reaches disk
//! 4. Optionally copy the previous file to `.bak`
//! 5. Rename the temp file over the target

use super::bridge::{shortcuts_to_tree, tree_to_shortcuts};
use super::model::Shortcuts;
use crate::error::{ShortcutError, Result};
use crate::vdf;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use tracing::{debug, info, warn};

/// Load the shortcuts stored at `path`.
///
/// A missing file is an error; use [`load_or_default`] when an absent store
/// should count as empty. On a decode failure no partial collection is
/// returned.
pub fn load(path: &Path) -> Result<Shortcuts> {
    let bytes = fs::read(path).map_err(|e| ShortcutError::io_with_path(e, path))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let tree = vdf::decode(&bytes)?;
    let shortcuts = tree_to_shortcuts(&tree)?;
    debug!("Loaded {} shortcuts from {}", shortcuts.len(), path.display());
    Ok(shortcuts)
}

/// Load the shortcuts at `path`, or an empty collection if there is no file.
pub fn load_or_default(path: &Path) -> Result<Shortcuts> {
    match fs::metadata(path) {
        Ok(_) => load(path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No shortcuts file at {}, starting empty", path.display());
            Ok(Shortcuts::new())
        }
        Err(e) => Err(ShortcutError::io_with_path(e, path)),
    }
}

/// Write `shortcuts` to `path`, replacing any existing file atomically.
pub fn save(shortcuts: &Shortcuts, path: &Path) -> Result<()> {
    write_atomic(shortcuts, path, false)
}

/// Like [`save`], but first copies the existing file to `<path>.bak`.
pub fn save_with_backup(shortcuts: &Shortcuts, path: &Path) -> Result<()> {
    write_atomic(shortcuts, path, true)
}

/// Path of the backup written by [`save_with_backup`].
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn write_atomic(shortcuts: &Shortcuts, path: &Path, keep_backup: bool) -> Result<()> {
    // Encode first so a bad collection never touches the disk
    let bytes = vdf::encode(&shortcuts_to_tree(shortcuts))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ShortcutError::Io {
                message: format!("Failed to create directory {}", parent.display()),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = write_temp(&temp_path, &bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if keep_backup && path.exists() {
        let backup = backup_path(path);
        match fs::copy(path, &backup) {
            Ok(_) => debug!("Created backup: {}", backup.display()),
            Err(e) => warn!("Failed to create backup {}: {}", backup.display(), e),
        }
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ShortcutError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        });
    }

    info!("Saved {} shortcuts to {}", shortcuts.len(), path.display());
    Ok(())
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |what: &str, e: std::io::Error| ShortcutError::Io {
        message: format!("Failed to {} temp file {}", what, temp_path.display()),
        path: Some(temp_path.to_path_buf()),
        source: Some(e),
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| io_err("create", e))?;
    file.write_all(bytes).map_err(|e| io_err("write", e))?;
    file.sync_all().map_err(|e| io_err("sync", e))?;
    Ok(())
}

/// Sibling temp file unique to this process and thread.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}.{}.tmp", process::id(), thread_id()));
    PathBuf::from(name)
}

fn thread_id() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    thread::current().id().hash(&mut hasher);
    hasher.finish()
}
