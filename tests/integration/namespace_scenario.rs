use std::sync::atomic::{AtomicUsize, Ordering};
use treefs::{FixedSize, Namespace, NamespaceError, NodeKind, SharedNamespace};

#[test]
fn scenario_sizes_reach_root() {
    let mut ns = Namespace::new();
    ns.make_directory("/a/b/c").unwrap();
    ns.make_directory("/x/y").unwrap();
    assert_eq!(ns.list("/").unwrap().collect::<Vec<_>>(), vec!["a", "x"]);

    let f = ns.create_file("/a/b/c/f").unwrap();
    ns.write_content("/a/b/c/f", "hello").unwrap();
    ns.write_content("/a/b/c/f", " world").unwrap();
    assert_eq!(ns.read_content("/a/b/c/f").unwrap(), "hello world");

    let s = ns.node(f).unwrap().size();
    assert!((1000..=11000).contains(&s));
    for path in ["/a/b/c", "/a/b", "/a", "/"] {
        assert_eq!(ns.stat(path).unwrap().size, s, "size at {}", path);
    }
    assert_eq!(ns.stat("/x").unwrap().size, 0);
    ns.verify_sizes().unwrap();
}

#[test]
fn file_blocks_deeper_creation_without_mutation() {
    let mut ns = Namespace::with_size_generator(FixedSize(1000));
    ns.create_file("/a/b").unwrap();
    let before = ns.walk();

    let err = ns.create_file("/a/b/c").unwrap_err();
    assert_eq!(err, NamespaceError::FileExistsAsNonDirectory("/a/b".to_string()));
    let err = ns.create_file("/a/b/c/d/e").unwrap_err();
    assert_eq!(err, NamespaceError::FileExistsAsNonDirectory("/a/b".to_string()));

    assert_eq!(ns.walk(), before);
    assert_eq!(ns.total_size(), 1000);
}

#[test]
fn creation_on_write_builds_directories() {
    let mut ns = Namespace::with_size_generator(FixedSize(3000));
    ns.write_content("/logs/2024/app.log", "started\n").unwrap();
    ns.write_content("/logs/2024/app.log", "stopped\n").unwrap();

    assert_eq!(ns.read_content("/logs/2024/app.log").unwrap(), "started\nstopped\n");
    assert_eq!(ns.stat("/logs/2024").unwrap().kind, NodeKind::Directory);
    assert_eq!(ns.stat("/logs").unwrap().size, 3000);
}

#[test]
fn sibling_files_accumulate() {
    let sizes = [1500u64, 2500, 4000];
    let next = AtomicUsize::new(0);
    let mut ns =
        Namespace::with_size_generator(move || sizes[next.fetch_add(1, Ordering::SeqCst) % 3]);

    ns.create_file("/d/one").unwrap();
    ns.create_file("/d/two").unwrap();
    ns.create_file("/e/three").unwrap();

    assert_eq!(ns.stat("/d").unwrap().size, 4000);
    assert_eq!(ns.stat("/e").unwrap().size, 4000);
    assert_eq!(ns.total_size(), 8000);
    ns.verify_sizes().unwrap();
}

#[test]
fn renamed_directory_keeps_subtree() {
    let mut ns = Namespace::with_size_generator(FixedSize(1000));
    ns.write_content("/old/inner/f", "x").unwrap();
    let id = ns.lookup("/old").unwrap();
    ns.rename(id, "new").unwrap();

    assert_eq!(ns.path_of(id), "/new");
    assert_eq!(ns.read_content("/new/inner/f").unwrap(), "x");
    assert_eq!(
        ns.read_content("/old/inner/f").unwrap_err(),
        NamespaceError::NotFound("/old/inner/f".to_string())
    );
    assert_eq!(ns.stat("/new").unwrap().size, 1000);
}

#[test]
fn shared_namespace_round_trip() {
    let shared = SharedNamespace::new(Namespace::with_size_generator(FixedSize(1000)));
    shared.make_directory("/a").unwrap();
    shared.write_content("/a/f", "hi").unwrap();
    assert_eq!(shared.read_content("/a/f").unwrap(), "hi");
    assert_eq!(shared.list("/a").unwrap(), vec!["f"]);

    {
        let ns = shared.read();
        assert_eq!(ns.total_size(), 1000);
    }
    shared.rename_path("/a/f", "g").unwrap();
    assert!(shared.lookup("/a/g").is_some());
}
