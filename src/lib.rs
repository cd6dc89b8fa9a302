//! treefs: In-Memory Hierarchical Namespace
//!
//! A tree of directories and files addressed by slash-delimited paths. Files
//! carry a size assigned at creation and an append-only content buffer; every
//! directory reports the aggregate size of the files beneath it.
//!
//! ```
//! use treefs::{FixedSize, Namespace};
//!
//! let mut ns = Namespace::with_size_generator(FixedSize(1000));
//! ns.make_directory("/a/b/c").unwrap();
//! ns.write_content("/a/b/c/f", "hello").unwrap();
//! assert_eq!(ns.read_content("/a/b/c/f").unwrap(), "hello");
//! assert_eq!(ns.stat("/a").unwrap().size, 1000);
//! ```

pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod path;
pub mod sizing;
pub mod tooling;
pub mod tree;
pub mod types;

pub use concurrency::SharedNamespace;
pub use error::{ApiError, NamespaceError};
pub use namespace::{Listing, Namespace, NodeInfo, SizeMismatch};
pub use path::{PathResolver, Resolution};
pub use sizing::{FixedSize, RandomSize, SizeGenerator};
pub use tree::{DirectoryNode, FileNode, Node};
pub use types::{NodeId, NodeKind, Size};
