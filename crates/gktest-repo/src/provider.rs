use camino::{Utf8Path, Utf8PathBuf};
use gktest_types::SuitePath;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {0}")]
    NotFound(SuitePath),

    #[error("read {path}: {source}")]
    Io {
        path: SuitePath,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// Read-only, path-keyed source of file contents.
pub trait FileProvider {
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError>;
}

/// Files under a directory on disk.
#[derive(Clone, Debug)]
pub struct DirFileProvider {
    root: Utf8PathBuf,
}

impl DirFileProvider {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl FileProvider for DirFileProvider {
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError> {
        let abs = if path.is_root() {
            self.root.clone()
        } else {
            self.root.join(path.as_utf8_path())
        };
        std::fs::read(&abs).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.clone()),
            _ => FsError::Io {
                path: path.clone(),
                source,
            },
        })
    }
}

/// Files held in memory, keyed by normalized path.
#[derive(Clone, Debug, Default)]
pub struct MapFileProvider {
    files: BTreeMap<SuitePath, Vec<u8>>,
}

impl MapFileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, contents: impl Into<Vec<u8>>) {
        self.files.insert(SuitePath::new(path), contents.into());
    }

    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl FileProvider for MapFileProvider {
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.clone()))
    }
}

impl<P: FileProvider + ?Sized> FileProvider for &P {
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError> {
        (**self).read(path)
    }
}
