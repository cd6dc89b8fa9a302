//! Path resolution
//!
//! Turns slash-delimited strings into segments and walks the arena as far as
//! matching children exist.

use crate::tree::{Arena, Node};
use crate::types::NodeId;

/// Outcome of walking a path from a starting directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Number of leading segments that matched existing nodes
    pub matched: usize,
    /// Deepest node reached
    pub node: NodeId,
}

impl Resolution {
    /// True when every segment resolved
    pub fn is_complete(&self, segments: &[&str]) -> bool {
        self.matched == segments.len()
    }
}

/// Path resolver
pub struct PathResolver;

impl PathResolver {
    /// Split a path into its non-empty segments
    ///
    /// Normalization is total: `""` and `"/"` both yield no segments, and
    /// leading, trailing or doubled separators never produce empty names.
    ///
    /// ```
    /// use treefs::PathResolver;
    ///
    /// assert_eq!(PathResolver::normalize("/a/b/c/"), vec!["a", "b", "c"]);
    /// assert!(PathResolver::normalize("/").is_empty());
    /// ```
    pub fn normalize(path: &str) -> Vec<&str> {
        path.split('/').filter(|segment| !segment.is_empty()).collect()
    }

    /// Walk from `start` following `segments` while a matching child exists
    ///
    /// Stops at the first missing child, or on reaching a file.
    pub fn resolve(arena: &Arena, start: NodeId, segments: &[&str]) -> Resolution {
        let mut current = start;
        let mut matched = 0;
        for segment in segments {
            let next = match arena.get(current) {
                Some(Node::Directory(dir)) => dir.child(segment),
                _ => None,
            };
            match next {
                Some(child) => {
                    current = child;
                    matched += 1;
                }
                None => break,
            }
        }
        Resolution {
            matched,
            node: current,
        }
    }

    /// Whether `name` can be used as a single node name
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.contains('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{DirectoryNode, FileNode};

    #[test]
    fn test_normalize_root_and_empty() {
        assert!(PathResolver::normalize("").is_empty());
        assert!(PathResolver::normalize("/").is_empty());
        assert!(PathResolver::normalize("//").is_empty());
    }

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(PathResolver::normalize("/a/b"), vec!["a", "b"]);
        assert_eq!(PathResolver::normalize("/a/b/"), vec!["a", "b"]);
        assert_eq!(PathResolver::normalize("a/b"), vec!["a", "b"]);
        assert_eq!(PathResolver::normalize("/a//b"), vec!["a", "b"]);
    }

    #[test]
    fn test_is_valid_name() {
        assert!(PathResolver::is_valid_name("file.txt"));
        assert!(!PathResolver::is_valid_name(""));
        assert!(!PathResolver::is_valid_name("a/b"));
    }

    fn sample_arena() -> (Arena, NodeId, NodeId) {
        let mut arena = Arena::new();
        let a = arena.insert(NodeId::ROOT, DirectoryNode::new("a").into()).unwrap();
        let f = arena.insert(a, FileNode::new("f", 1000).into()).unwrap();
        (arena, a, f)
    }

    #[test]
    fn test_resolve_full_match() {
        let (arena, _, f) = sample_arena();
        let segments = ["a", "f"];
        let res = PathResolver::resolve(&arena, NodeId::ROOT, &segments);
        assert_eq!(res, Resolution { matched: 2, node: f });
        assert!(res.is_complete(&segments));
    }

    #[test]
    fn test_resolve_stops_at_missing_child() {
        let (arena, a, _) = sample_arena();
        let segments = ["a", "missing", "deeper"];
        let res = PathResolver::resolve(&arena, NodeId::ROOT, &segments);
        assert_eq!(res, Resolution { matched: 1, node: a });
        assert!(!res.is_complete(&segments));
    }

    #[test]
    fn test_resolve_stops_at_file() {
        let (arena, _, f) = sample_arena();
        let res = PathResolver::resolve(&arena, NodeId::ROOT, &["a", "f", "x"]);
        assert_eq!(res, Resolution { matched: 2, node: f });
    }

    #[test]
    fn test_resolve_empty_is_start() {
        let (arena, _, _) = sample_arena();
        let res = PathResolver::resolve(&arena, NodeId::ROOT, &[]);
        assert_eq!(res, Resolution { matched: 0, node: NodeId::ROOT });
    }
}
