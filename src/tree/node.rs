//! Namespace node types

use crate::types::{NodeId, NodeKind, Size};
use std::collections::BTreeMap;

/// File node representation
#[derive(Debug, Clone)]
pub struct FileNode {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) size: Size,
    pub(crate) content: String,
}

impl FileNode {
    /// Create a detached file with empty content
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            parent: None,
            size,
            content: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Append text to the content buffer
    pub(crate) fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }
}

/// Directory node representation
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) size: Size,
    pub(crate) children: BTreeMap<String, NodeId>, // name -> child, ordered by name
}

impl DirectoryNode {
    /// Create a detached, empty directory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            size: 0,
            children: BTreeMap::new(),
        }
    }

    /// Look up an immediate child by name
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Immediate children in ascending name order
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Namespace node: either a file or a directory
#[derive(Debug, Clone)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Directory(d) => &d.name,
        }
    }

    /// Enclosing directory, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::File(f) => f.parent,
            Node::Directory(d) => d.parent,
        }
    }

    /// File size, or the aggregate of every file beneath a directory
    pub fn size(&self) -> Size {
        match self {
            Node::File(f) => f.size,
            Node::Directory(d) => d.size,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Directory(_) => NodeKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub(crate) fn as_file_mut(&mut self) -> Option<&mut FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }

    pub(crate) fn as_directory_mut(&mut self) -> Option<&mut DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        match self {
            Node::File(f) => f.name = name,
            Node::Directory(d) => d.name = name,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        match self {
            Node::File(f) => f.parent = Some(parent),
            Node::Directory(d) => d.parent = Some(parent),
        }
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<DirectoryNode> for Node {
    fn from(dir: DirectoryNode) -> Self {
        Node::Directory(dir)
    }
}
