//! Node storage
//!
//! Nodes live in an arena and refer to their parent by `NodeId`. The children
//! map of each directory is the only downward edge.

pub mod arena;
pub mod node;

pub use arena::Arena;
pub use node::{DirectoryNode, FileNode, Node};
