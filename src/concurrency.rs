//! Shared access to a namespace
//!
//! Wraps a [`Namespace`] in a single read-write lock. Every mutating operation
//! holds the write guard across resolution and mutation, so two callers can
//! never both observe a directory as missing and both create it.

use crate::error::NamespaceError;
use crate::namespace::{Namespace, NodeInfo, SizeMismatch};
use crate::types::{NodeId, Size};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable handle to a namespace shared between threads
#[derive(Debug, Clone)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(namespace)),
        }
    }

    /// Hold the read lock for several queries in a row
    pub fn read(&self) -> RwLockReadGuard<'_, Namespace> {
        self.inner.read()
    }

    /// Hold the write lock for several mutations in a row
    pub fn write(&self) -> RwLockWriteGuard<'_, Namespace> {
        self.inner.write()
    }

    /// Child names at `path`, in ascending order
    pub fn list(&self, path: &str) -> Result<Vec<String>, NamespaceError> {
        let ns = self.inner.read();
        let listing = ns.list(path)?;
        Ok(listing.map(str::to_string).collect())
    }

    pub fn make_directory(&self, path: &str) -> Result<NodeId, NamespaceError> {
        self.inner.write().make_directory(path)
    }

    pub fn create_file(&self, path: &str) -> Result<NodeId, NamespaceError> {
        self.inner.write().create_file(path)
    }

    pub fn write_content(&self, path: &str, text: &str) -> Result<NodeId, NamespaceError> {
        self.inner.write().write_content(path, text)
    }

    pub fn read_content(&self, path: &str) -> Result<String, NamespaceError> {
        self.inner.read().read_content(path).map(str::to_string)
    }

    pub fn rename(&self, id: NodeId, new_name: &str) -> Result<(), NamespaceError> {
        self.inner.write().rename(id, new_name)
    }

    pub fn rename_path(&self, path: &str, new_name: &str) -> Result<NodeId, NamespaceError> {
        self.inner.write().rename_path(path, new_name)
    }

    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        self.inner.read().lookup(path)
    }

    pub fn stat(&self, path: &str) -> Result<NodeInfo, NamespaceError> {
        self.inner.read().stat(path)
    }

    pub fn total_size(&self) -> Size {
        self.inner.read().total_size()
    }

    pub fn verify_sizes(&self) -> Result<(), SizeMismatch> {
        self.inner.read().verify_sizes()
    }
}

impl Default for SharedNamespace {
    fn default() -> Self {
        Self::new(Namespace::new())
    }
}

impl From<Namespace> for SharedNamespace {
    fn from(namespace: Namespace) -> Self {
        Self::new(namespace)
    }
}
