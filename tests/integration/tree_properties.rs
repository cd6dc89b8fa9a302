use proptest::prelude::*;
use treefs::{FixedSize, Namespace, NodeId, NodeKind};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,4}"
}

fn path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..5)
}

fn join(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[derive(Debug, Clone)]
enum Op {
    Mkdir(Vec<String>),
    Touch(Vec<String>),
    Write(Vec<String>, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        path().prop_map(Op::Mkdir),
        path().prop_map(Op::Touch),
        (path(), "[a-z ]{0,8}").prop_map(|(p, t)| Op::Write(p, t)),
    ]
}

proptest! {
    #[test]
    fn size_invariant_holds(ops in prop::collection::vec(op(), 1..40), size in 1u64..20_000) {
        let mut ns = Namespace::with_size_generator(FixedSize(size));
        for op in &ops {
            // conflicts are expected and must leave sizes untouched
            let _ = match op {
                Op::Mkdir(p) => ns.make_directory(&join(p)).map(|_| ()),
                Op::Touch(p) => ns.create_file(&join(p)).map(|_| ()),
                Op::Write(p, t) => ns.write_content(&join(p), t).map(|_| ()),
            };
            prop_assert!(ns.verify_sizes().is_ok());
        }
        let files = ns.walk().iter().filter(|i| i.kind == NodeKind::File).count() as u64;
        prop_assert_eq!(ns.total_size(), files * size);
    }

    #[test]
    fn mkdir_is_idempotent(paths in prop::collection::vec(path(), 1..10)) {
        let mut once = Namespace::with_size_generator(FixedSize(1));
        let mut twice = Namespace::with_size_generator(FixedSize(1));
        for p in &paths {
            once.make_directory(&join(p)).unwrap();
            twice.make_directory(&join(p)).unwrap();
            twice.make_directory(&join(p)).unwrap();
        }
        prop_assert_eq!(once.walk(), twice.walk());
    }

    #[test]
    fn mkdir_path_resolves_fully(segments in path()) {
        let mut ns = Namespace::new();
        let id = ns.make_directory(&join(&segments)).unwrap();
        let res = ns.resolve(&join(&segments));
        prop_assert_eq!(res.matched, segments.len());
        prop_assert_eq!(res.node, id);
        prop_assert_ne!(id, NodeId::ROOT);
    }

    #[test]
    fn listing_is_sorted(names in prop::collection::vec(segment(), 1..20)) {
        let mut ns = Namespace::new();
        for name in &names {
            ns.make_directory(&format!("/root/{}", name)).unwrap();
        }
        let listed: Vec<String> = ns.list("/root").unwrap().map(str::to_string).collect();
        let mut expected = names.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(listed, expected);
    }
}
