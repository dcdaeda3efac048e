use gktest_repo::{FileProvider, FsError};
use gktest_types::SuitePath;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps a provider and counts reads, so tests can assert that no file was touched.
#[derive(Clone, Debug)]
pub struct CountingFileProvider<P> {
    inner: P,
    reads: Arc<AtomicUsize>,
}

impl<P> CountingFileProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter; stays valid after the provider is moved into a runner.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }
}

impl<P: FileProvider> FileProvider for CountingFileProvider<P> {
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read(path)
    }
}

/// Fails reads of selected paths with an IO error other than "not found".
#[derive(Clone, Debug)]
pub struct FailingFileProvider<P> {
    inner: P,
    failing: BTreeSet<SuitePath>,
}

impl<P> FailingFileProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            failing: BTreeSet::new(),
        }
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(SuitePath::new(path));
        self
    }
}

impl<P: FileProvider> FileProvider for FailingFileProvider<P> {
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError> {
        if self.failing.contains(path) {
            return Err(FsError::Io {
                path: path.clone(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.inner.read(path)
    }
}

/// Calls a hook with every path before reading it.
pub struct InspectingFileProvider<P, F> {
    inner: P,
    on_read: F,
}

impl<P, F> InspectingFileProvider<P, F>
where
    F: Fn(&SuitePath),
{
    pub fn new(inner: P, on_read: F) -> Self {
        Self { inner, on_read }
    }
}

impl<P, F> FileProvider for InspectingFileProvider<P, F>
where
    P: FileProvider,
    F: Fn(&SuitePath),
{
    fn read(&self, path: &SuitePath) -> Result<Vec<u8>, FsError> {
        (self.on_read)(path);
        self.inner.read(path)
    }
}
