//! Namespace
//!
//! Owns the root directory and exposes the path-addressed operations. Every
//! operation normalizes its path, resolves as far as possible from the root,
//! then creates or mutates on whatever suffix did not resolve. Conflicts are
//! detected before anything is inserted, so a failed call leaves the tree as
//! it was.

use crate::config::SizingConfig;
use crate::error::{ApiError, NamespaceError};
use crate::path::{PathResolver, Resolution};
use crate::sizing::{RandomSize, SizeGenerator};
use crate::tree::{Arena, DirectoryNode, FileNode, Node};
use crate::types::{NodeId, NodeKind, Size};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Snapshot of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: NodeId,
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub size: Size,
    /// Number of immediate children, directories only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<usize>,
}

/// A directory whose recorded size differs from the sum of its files
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("size mismatch at {path}: recorded {recorded}, actual {actual}")]
pub struct SizeMismatch {
    pub path: String,
    pub recorded: Size,
    pub actual: Size,
}

/// Ascending, lazily produced child names of one directory
pub struct Listing<'a> {
    node: NodeId,
    exact: bool,
    names: btree_map::Keys<'a, String, NodeId>,
}

impl<'a> Listing<'a> {
    /// Directory being listed
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// False when the path only partially resolved and the listing is of
    /// the deepest directory reached instead
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.names.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl ExactSizeIterator for Listing<'_> {}

/// In-memory tree of directories and files
pub struct Namespace {
    arena: Arena,
    sizes: Box<dyn SizeGenerator>,
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("nodes", &self.arena.len())
            .field("size", &self.total_size())
            .finish()
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create an empty namespace drawing file sizes from the default range
    pub fn new() -> Self {
        Self::with_size_generator(RandomSize::default())
    }

    pub fn with_size_generator<G>(sizes: G) -> Self
    where
        G: SizeGenerator + 'static,
    {
        Self {
            arena: Arena::new(),
            sizes: Box::new(sizes),
        }
    }

    /// Create an empty namespace using the configured sizing policy
    pub fn from_config(sizing: &SizingConfig) -> Result<Self, ApiError> {
        Ok(Self {
            arena: Arena::new(),
            sizes: sizing.build()?,
        })
    }

    pub fn root(&self) -> NodeId {
        self.arena.root()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Aggregate size of the whole namespace
    pub fn total_size(&self) -> Size {
        self.arena.total_size()
    }

    /// Absolute path of a node
    pub fn path_of(&self, id: NodeId) -> String {
        self.arena.path_of(id)
    }

    /// Walk `path` from the root as far as it exists
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = PathResolver::normalize(path);
        PathResolver::resolve(&self.arena, self.root(), &segments)
    }

    /// Id of the node at `path`, if every segment exists
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        let segments = PathResolver::normalize(path);
        let res = PathResolver::resolve(&self.arena, self.root(), &segments);
        res.is_complete(&segments).then_some(res.node)
    }

    /// List the immediate children of the directory at `path`
    ///
    /// A path that only partially resolves lists the deepest directory
    /// reached; check [`Listing::is_exact`] to tell the two apart.
    pub fn list(&self, path: &str) -> Result<Listing<'_>, NamespaceError> {
        let segments = PathResolver::normalize(path);
        let res = PathResolver::resolve(&self.arena, self.root(), &segments);
        match self.arena.get(res.node) {
            Some(Node::Directory(dir)) => Ok(Listing {
                node: res.node,
                exact: res.is_complete(&segments),
                names: dir.children.keys(),
            }),
            _ => Err(NamespaceError::NotADirectory(self.arena.path_of(res.node))),
        }
    }

    /// Create every missing directory along `path`
    ///
    /// Returns the directory at `path`. Existing directories are left alone,
    /// so repeating the call is a no-op.
    pub fn make_directory(&mut self, path: &str) -> Result<NodeId, NamespaceError> {
        let segments = PathResolver::normalize(path);
        let res = PathResolver::resolve(&self.arena, self.root(), &segments);
        if !self.is_directory(res.node) {
            let at = self.arena.path_of(res.node);
            warn!(path, at = %at, "mkdir through a file");
            return Err(NamespaceError::NotADirectory(at));
        }

        let missing = &segments[res.matched..];
        let dir = self.create_directories(res.node, missing)?;
        if !missing.is_empty() {
            debug!(path, created = missing.len(), "directories created");
        }
        Ok(dir)
    }

    /// Create an empty file at `path`, creating missing parent directories
    pub fn create_file(&mut self, path: &str) -> Result<NodeId, NamespaceError> {
        let segments = PathResolver::normalize(path);
        if segments.is_empty() {
            return Err(NamespaceError::InvalidPath(path.to_string()));
        }
        let res = PathResolver::resolve(&self.arena, self.root(), &segments);
        if res.is_complete(&segments) {
            warn!(path, "file already exists");
            return Err(NamespaceError::AlreadyExists(self.arena.path_of(res.node)));
        }
        if !self.is_directory(res.node) {
            let at = self.arena.path_of(res.node);
            warn!(path, at = %at, "file exists where a directory is required");
            return Err(NamespaceError::FileExistsAsNonDirectory(at));
        }
        self.create_file_at(res, &segments)
    }

    /// Append `text` to the file at `path`
    ///
    /// A file that does not exist yet is created first, together with any
    /// missing parent directories.
    pub fn write_content(&mut self, path: &str, text: &str) -> Result<NodeId, NamespaceError> {
        let segments = PathResolver::normalize(path);
        let res = PathResolver::resolve(&self.arena, self.root(), &segments);

        let target = if res.is_complete(&segments) {
            res.node
        } else if self.is_directory(res.node) {
            self.create_file_at(res, &segments)?
        } else {
            let at = self.arena.path_of(res.node);
            warn!(path, at = %at, "write through a file");
            return Err(NamespaceError::FileExistsAsNonDirectory(at));
        };

        if let Some(file) = self.arena.get_mut(target).and_then(Node::as_file_mut) {
            file.append(text);
            debug!(path, appended = text.len(), total = file.content.len(), "content written");
            return Ok(target);
        }
        Err(NamespaceError::NotAFile(self.arena.path_of(target)))
    }

    /// Content of the file at `path`
    pub fn read_content(&self, path: &str) -> Result<&str, NamespaceError> {
        let segments = PathResolver::normalize(path);
        let res = PathResolver::resolve(&self.arena, self.root(), &segments);
        if !res.is_complete(&segments) {
            return Err(NamespaceError::NotFound(path.to_string()));
        }
        match self.arena.get(res.node) {
            Some(Node::File(file)) => Ok(file.content()),
            _ => Err(NamespaceError::NotAFile(self.arena.path_of(res.node))),
        }
    }

    /// Rename a node, keeping its parent's children map keyed by the new name
    pub fn rename(&mut self, id: NodeId, new_name: &str) -> Result<(), NamespaceError> {
        if !PathResolver::is_valid_name(new_name) {
            return Err(NamespaceError::InvalidPath(new_name.to_string()));
        }
        let old_path = self.arena.path_of(id);
        self.arena.rename(id, new_name)?;
        info!(from = %old_path, to = %self.arena.path_of(id), "node renamed");
        Ok(())
    }

    /// Rename the node at `path`
    pub fn rename_path(&mut self, path: &str, new_name: &str) -> Result<NodeId, NamespaceError> {
        let id = self
            .lookup(path)
            .ok_or_else(|| NamespaceError::NotFound(path.to_string()))?;
        self.rename(id, new_name)?;
        Ok(id)
    }

    /// Snapshot of the node with the given id
    pub fn info(&self, id: NodeId) -> Option<NodeInfo> {
        let node = self.arena.get(id)?;
        Some(NodeInfo {
            id,
            path: self.arena.path_of(id),
            name: node.name().to_string(),
            kind: node.kind(),
            size: node.size(),
            children: node.as_directory().map(DirectoryNode::len),
        })
    }

    /// Snapshot of the node at `path`
    pub fn stat(&self, path: &str) -> Result<NodeInfo, NamespaceError> {
        self.lookup(path)
            .and_then(|id| self.info(id))
            .ok_or_else(|| NamespaceError::NotFound(path.to_string()))
    }

    /// Every node in depth-first order, siblings by ascending name
    pub fn walk(&self) -> Vec<NodeInfo> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if let Some(info) = self.info(id) {
                out.push(info);
            }
            if let Some(dir) = self.arena.get(id).and_then(Node::as_directory) {
                // reversed so the smallest name is popped first
                stack.extend(dir.children.values().rev().copied());
            }
        }
        out
    }

    /// Check every directory's recorded size against its files
    pub fn verify_sizes(&self) -> Result<(), SizeMismatch> {
        let totals = self.arena.computed_sizes();
        for id in self.arena.ids() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            if !node.is_directory() {
                continue;
            }
            let actual = totals[id.index()];
            if actual != node.size() {
                return Err(SizeMismatch {
                    path: self.arena.path_of(id),
                    recorded: node.size(),
                    actual,
                });
            }
        }
        Ok(())
    }

    fn is_directory(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(Node::is_directory)
    }

    /// Chain one new directory per segment beneath `parent`
    fn create_directories(
        &mut self,
        parent: NodeId,
        segments: &[&str],
    ) -> Result<NodeId, NamespaceError> {
        let mut current = parent;
        for segment in segments {
            current = self
                .arena
                .insert(current, DirectoryNode::new(*segment).into())?;
        }
        Ok(current)
    }

    /// Create the file named by the last segment after a partial resolve
    /// that stopped at a directory
    fn create_file_at(
        &mut self,
        res: Resolution,
        segments: &[&str],
    ) -> Result<NodeId, NamespaceError> {
        let Some((leaf, dirs)) = segments.split_last() else {
            return Err(NamespaceError::InvalidPath(String::new()));
        };
        let size = self.sizes.next_size();
        // checked before any directory is created so a rejected file leaves no trace
        if let Err(err) = self.arena.check_capacity(res.node, size) {
            warn!(size, "file size would overflow aggregate");
            return Err(err);
        }
        let parent = self.create_directories(res.node, &dirs[res.matched..])?;
        let id = self.arena.insert(parent, FileNode::new(*leaf, size).into())?;
        debug!(path = %self.arena.path_of(id), size, "file created");
        Ok(id)
    }
}
