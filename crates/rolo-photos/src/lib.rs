//! Local-filesystem photo store.
//!
//! Files are opaque byte blobs under a single root directory. Names are
//! validated before any path resolution, so `../`-style traversal can never
//! escape the root.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid file name: {0:?}")]
  InvalidFileName(String),

  #[error("photo not found: {0}")]
  NotFound(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A photo store rooted at one directory, e.g. `uploads/photos`.
#[derive(Debug, Clone)]
pub struct FsPhotoStore {
  root: PathBuf,
}

impl FsPhotoStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Resolve `name` under the root, rejecting anything that is not a plain
  /// file name. Separators and dot-dot names would let a crafted request
  /// read or write outside the store.
  fn resolve(&self, name: &str) -> Result<PathBuf> {
    if name.is_empty()
      || name.contains(['/', '\\'])
      || name == "."
      || name == ".."
    {
      return Err(Error::InvalidFileName(name.to_owned()));
    }
    Ok(self.root.join(name))
  }

  /// Write `bytes` under `name`, creating the root directory as needed.
  /// Returns the stored path.
  pub async fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = self.resolve(name)?;
    tokio::fs::create_dir_all(&self.root).await?;
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
  }

  /// Read the blob stored under `name`.
  pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
    let path = self.resolve(name)?;
    match tokio::fs::read(&path).await {
      Ok(bytes) => Ok(bytes),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        Err(Error::NotFound(name.to_owned()))
      }
      Err(e) => Err(e.into()),
    }
  }
}
