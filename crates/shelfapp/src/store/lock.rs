use crate::error::{Result, ShelfError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Advisory lock held as a sibling `<data file>.lock`.
///
/// Creation uses create-new semantics, so a second process fails instead of
/// waiting. The file is removed when the guard is dropped. A crash leaves the
/// file behind; [`ShelfError::Locked`] names it so the user can remove it.
#[derive(Debug)]
pub struct LockFile {
    path: PathBuf,
}

impl LockFile {
    pub fn lock_path_for(data_file: &Path) -> PathBuf {
        let mut name = data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        data_file.with_file_name(name)
    }

    pub fn acquire(data_file: &Path) -> Result<Self> {
        let path = Self::lock_path_for(data_file);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ShelfError::io(parent, e))?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ShelfError::Locked(path));
            }
            Err(e) => return Err(ShelfError::io(&path, e)),
        };
        if let Err(e) = writeln!(file, "{}", std::process::id()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(ShelfError::io(&path, e));
        }

        tracing::debug!(lock = %path.display(), "acquired store lock");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(lock = %self.path.display(), "released store lock"),
            Err(e) => tracing::warn!(lock = %self.path.display(), error = %e, "could not remove lock file"),
        }
    }
}
