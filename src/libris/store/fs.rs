use super::{decode, encode, DataStore};
use crate::error::{LibrisError, Result};
use crate::model::Book;
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog.json".to_string())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(LibrisError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "catalog file does not exist");
                return Ok(None);
            }
            Err(e) => return Err(LibrisError::Io(e)),
        };

        let books = decode(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            books = books.len(),
            bytes = content.len(),
            "catalog loaded"
        );
        Ok(Some(books))
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        let content = encode(books)?;
        let dir = self.dir();
        self.ensure_dir(&dir)?;

        // Write next to the target, then rename over it
        let tmp_file = dir.join(format!(".{}-{}.tmp", self.file_name(), Uuid::new_v4()));
        fs::write(&tmp_file, &content).map_err(LibrisError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(LibrisError::Io(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            books = books.len(),
            bytes = content.len(),
            "catalog saved"
        );
        Ok(())
    }

    fn quarantine(&mut self) -> Result<Option<PathBuf>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let suffix = Uuid::new_v4().simple().to_string();
        let target = self.dir().join(format!(
            "{}.corrupt-{}-{}",
            self.file_name(),
            stamp,
            &suffix[..8]
        ));
        fs::rename(&self.path, &target).map_err(LibrisError::Io)?;

        tracing::debug!(
            from = %self.path.display(),
            to = %target.display(),
            "unreadable catalog moved aside"
        );
        Ok(Some(target))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
