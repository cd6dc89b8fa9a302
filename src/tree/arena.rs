//! Arena of namespace nodes with size propagation

use crate::error::NamespaceError;
use crate::tree::node::{DirectoryNode, Node};
use crate::types::{NodeId, Size};
use tracing::trace;

/// Owns every node of a namespace
///
/// Slot 0 is always the root directory, which has an empty name and no parent.
#[derive(Debug, Clone)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        Arena {
            nodes: vec![Node::Directory(DirectoryNode::new(""))],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes, root included
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Aggregate size held by the root, the largest in the tree
    pub fn total_size(&self) -> Size {
        self.nodes.first().map(Node::size).unwrap_or(0)
    }

    /// Fail if adding `size` would overflow any aggregate
    ///
    /// Checking the root covers every ancestor, since no aggregate exceeds it.
    pub(crate) fn check_capacity(&self, at: NodeId, size: Size) -> Result<(), NamespaceError> {
        match self.total_size().checked_add(size) {
            Some(_) => Ok(()),
            None => Err(NamespaceError::SizeOverflow {
                path: self.path_of(at),
                size,
            }),
        }
    }

    /// Insert `node` as a child of `parent`
    ///
    /// The parent must be a directory and must not already hold a child with
    /// the same name. A file's size is added to every ancestor.
    pub(crate) fn insert(&mut self, parent: NodeId, node: Node) -> Result<NodeId, NamespaceError> {
        let id = NodeId(self.nodes.len());
        let dir = self
            .get(parent)
            .and_then(Node::as_directory)
            .ok_or(NamespaceError::NullChild { parent, child: id })?;
        if dir.child(node.name()).is_some() {
            return Err(NamespaceError::AlreadyExists(self.child_path(parent, node.name())));
        }

        let size = node.size();
        self.check_capacity(parent, size)?;
        let mut node = node;
        node.set_parent(parent);
        self.nodes.push(node);
        self.link(parent, id)?;

        if size > 0 {
            self.propagate_size(parent, size);
        }
        Ok(id)
    }

    /// Register an allocated node under its parent's children map
    fn link(&mut self, parent: NodeId, child: NodeId) -> Result<(), NamespaceError> {
        let name = self
            .get(child)
            .map(|node| node.name().to_string())
            .ok_or(NamespaceError::NullChild { parent, child })?;
        let dir = self
            .get_mut(parent)
            .and_then(Node::as_directory_mut)
            .ok_or(NamespaceError::NullChild { parent, child })?;
        dir.children.insert(name, child);
        Ok(())
    }

    /// Add `delta` to `from` and every directory above it
    pub(crate) fn propagate_size(&mut self, from: NodeId, delta: Size) {
        let mut current = Some(from);
        while let Some(id) = current {
            let Some(Node::Directory(dir)) = self.nodes.get_mut(id.0) else {
                break;
            };
            dir.size += delta;
            trace!(node = %id, size = dir.size, "aggregate size updated");
            current = dir.parent;
        }
    }

    /// Rename a node and re-key its entry in the parent's children map
    pub(crate) fn rename(&mut self, id: NodeId, new_name: &str) -> Result<(), NamespaceError> {
        let node = self
            .get(id)
            .ok_or_else(|| NamespaceError::NotFound(id.to_string()))?;
        let Some(parent) = node.parent() else {
            return Err(NamespaceError::InvalidPath("cannot rename the root".to_string()));
        };
        let old_name = node.name().to_string();
        if old_name == new_name {
            return Ok(());
        }

        let taken = self
            .get(parent)
            .and_then(Node::as_directory)
            .ok_or(NamespaceError::NullChild { parent, child: id })?
            .child(new_name)
            .is_some();
        if taken {
            return Err(NamespaceError::AlreadyExists(self.child_path(parent, new_name)));
        }

        let dir = self
            .get_mut(parent)
            .and_then(Node::as_directory_mut)
            .ok_or(NamespaceError::NullChild { parent, child: id })?;
        dir.children.remove(&old_name);
        dir.children.insert(new_name.to_string(), id);

        if let Some(node) = self.get_mut(id) {
            node.set_name(new_name.to_string());
        }
        Ok(())
    }

    /// Absolute slash-delimited path of a node; the root is `/`
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            match node.parent() {
                Some(parent) => {
                    names.push(node.name());
                    current = self.get(parent);
                }
                None => break,
            }
        }
        if names.is_empty() {
            return "/".to_string();
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    fn child_path(&self, parent: NodeId, name: &str) -> String {
        let base = self.path_of(parent);
        if base == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", base, name)
        }
    }

    /// Sum of file sizes beneath every node, indexed by `NodeId`
    ///
    /// Children are always allocated after their parent, so one pass in
    /// reverse id order folds each subtree into its parent without recursion.
    pub fn computed_sizes(&self) -> Vec<Size> {
        let mut totals = vec![0; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate().rev() {
            if let Node::File(f) = node {
                totals[index] = f.size;
            }
            if let Some(parent) = node.parent() {
                totals[parent.0] = totals[parent.0].saturating_add(totals[index]);
            }
        }
        totals
    }

    /// Ids of every node, in allocation order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}
