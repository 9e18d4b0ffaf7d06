use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use log::{debug, info, warn, error};
use crate::errors::WikiError;
use crate::types::Page;

/// Service for loading and saving pages as `<title>.txt` files
///
/// Titles are used verbatim as file stems. Callers must only pass titles that
/// passed route validation. No locking is done: concurrent saves of the same
/// title race and the last completed write wins.
#[derive(Clone, Debug)]
pub struct PageService {
    data_dir: PathBuf,
}

impl PageService {
    /// Create a new page service rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageService with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing the given title
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", title))
    }

    /// Read a page in full
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.path_for(title);
        debug!("Loading page '{}' from {:?}", title, path);

        let body = fs::read(&path).map_err(|e| {
            debug!("Page '{}' unavailable: {}", title, e);
            WikiError::PageNotFound { title: title.to_string(), source: e }
        })?;

        info!("Loaded page '{}', {} bytes", title, body.len());
        Ok(Page { title: title.to_string(), body })
    }

    /// Write a page, replacing whatever was stored under its title
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        self.ensure_data_dir()?;

        let path = self.path_for(&page.title);
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path).map_err(|e| {
            error!("Failed to open {:?} for writing: {}", path, e);
            WikiError::Io(e)
        })?;
        file.write_all(&page.body).map_err(|e| {
            error!("Failed to write {:?}: {}", path, e);
            WikiError::Io(e)
        })?;

        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }

    fn ensure_data_dir(&self) -> Result<(), WikiError> {
        if self.data_dir.is_dir() {
            return Ok(());
        }

        warn!("Data directory {:?} missing, creating it", self.data_dir);
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(&self.data_dir).map_err(|e| {
            error!("Failed to create data directory {:?}: {}", self.data_dir, e);
            WikiError::Io(e)
        })
    }
}
