use super::lock::LockFile;
use super::{decode, encode, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
    lock: Option<LockFile>,
}

impl FileStore {
    /// Store without a lock; suitable for read-only commands.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: None,
        }
    }

    /// Store holding the advisory lock until it is dropped.
    pub fn locked(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let lock = LockFile::acquire(&path)?;
        Ok(Self {
            path,
            lock: Some(lock),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ShelfError::io(parent, e))?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "books.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}

/// Write `content` to `path` through a temp file in the same directory.
pub(crate) fn write_atomic(path: &Path, tmp: &Path, content: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut file = File::create(tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(tmp, path)
    };

    write().map_err(|e| {
        let _ = fs::remove_file(tmp);
        ShelfError::io(path, e)
    })
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ShelfError::corrupt(&self.path, e.to_string())),
        };

        let books = decode(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content = encode(&self.path, books)?;
        write_atomic(&self.path, &self.tmp_path(), &content)?;
        tracing::debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
