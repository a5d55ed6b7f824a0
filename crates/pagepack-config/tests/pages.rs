//! Tests for page discovery over real directory trees.

use pagepack_config::{DiscoveryError, InjectMode, PageDiscovery, discover_pages};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_page(root: &Path, name: &str, files: &[&str]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create page dir");
    for file in files {
        fs::write(dir.join(file), format!("// {name}/{file}")).expect("write page file");
    }
}

#[test]
fn discovers_every_page_with_its_own_chunk() {
    let dir = TempDir::new().unwrap();
    for name in ["a", "b", "c"] {
        write_page(dir.path(), name, &["index.js", "index.html"]);
    }

    let pages = discover_pages(dir.path()).unwrap();

    let keys: BTreeSet<_> = pages.entries().pages().collect();
    assert_eq!(keys, BTreeSet::from(["a", "b", "c"]));
    for name in ["a", "b", "c"] {
        assert_eq!(
            pages.entries().get(name).unwrap(),
            dir.path().join(name).join("index.js")
        );
    }

    assert_eq!(pages.html().len(), 3);
    for directive in pages.html() {
        assert_eq!(directive.included_chunks, vec![directive.page_name.clone()]);
    }
}

#[test]
fn empty_root_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let pages = discover_pages(dir.path()).unwrap();
    assert!(pages.entries().is_empty());
    assert!(pages.html().is_empty());
}

#[test]
fn missing_root_yields_nothing_by_default() {
    let dir = TempDir::new().unwrap();
    let pages = discover_pages(dir.path().join("does-not-exist")).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn missing_root_fails_in_strict_mode() {
    let dir = TempDir::new().unwrap();
    let err = PageDiscovery::new(dir.path().join("does-not-exist"))
        .strict(true)
        .discover()
        .unwrap_err();
    assert!(matches!(err, DiscoveryError::RootNotFound(_)));
}

#[test]
fn directory_without_index_script_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "home", &["index.js", "index.html"]);
    write_page(dir.path(), "assets", &["logo.png", "index.html"]);
    write_page(dir.path(), "drafts", &["main.js"]);

    let pages = discover_pages(dir.path()).unwrap();

    assert_eq!(pages.entries().pages().collect::<Vec<_>>(), ["home"]);
    assert_eq!(pages.html().len(), 1);
    assert_eq!(pages.html()[0].page_name, "home");
}

#[test]
fn nested_index_scripts_are_not_pages() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "blog/post", &["index.js", "index.html"]);

    let pages = discover_pages(dir.path()).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn directory_named_like_an_entry_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("home").join("index.js")).unwrap();

    let pages = discover_pages(dir.path()).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn directive_paths_follow_page_layout() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "contact", &["index.js", "index.html"]);

    let pages = discover_pages(dir.path()).unwrap();
    let directive = &pages.html()[0];

    assert_eq!(directive.output_filename, "contact.html");
    assert_eq!(
        directive.template_path,
        dir.path().join("contact").join("index.html")
    );
    assert_eq!(directive.inject, InjectMode::Body);
    assert!(directive.minify.collapse_whitespace);
}

#[test]
fn template_path_is_set_even_when_template_is_missing() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "bare", &["index.js"]);

    let pages = discover_pages(dir.path()).unwrap();
    assert_eq!(
        pages.html()[0].template_path,
        dir.path().join("bare").join("index.html")
    );
}

#[test]
fn duplicate_page_name_keeps_last_discovered_entry() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "home", &["index.js", "index.ts", "index.html"]);

    let pages = PageDiscovery::new(dir.path())
        .script_extensions(["js", "ts"])
        .discover()
        .unwrap();

    assert_eq!(pages.entries().len(), 1);
    assert_eq!(
        pages.entries().get("home").unwrap(),
        dir.path().join("home").join("index.ts")
    );
    assert_eq!(pages.html().len(), 1);
}

#[test]
fn unrecognized_extensions_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "home", &["index.ts", "index.html"]);

    assert!(discover_pages(dir.path()).unwrap().is_empty());

    let pages = PageDiscovery::new(dir.path())
        .script_extensions(["ts"])
        .discover()
        .unwrap();
    assert_eq!(pages.len(), 1);
}

#[cfg(unix)]
#[test]
fn symlinked_page_directories_are_followed() {
    let dir = TempDir::new().unwrap();
    let shared = TempDir::new().unwrap();
    write_page(shared.path(), "landing", &["index.js", "index.html"]);
    std::os::unix::fs::symlink(shared.path().join("landing"), dir.path().join("promo")).unwrap();

    let pages = discover_pages(dir.path()).unwrap();
    assert_eq!(
        pages.entries().get("promo").unwrap(),
        dir.path().join("promo").join("index.js")
    );
}

#[test]
fn hidden_page_directories_are_skipped() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), ".cache", &["index.js", "index.html"]);
    write_page(dir.path(), ".git", &["index.js"]);
    write_page(dir.path(), "home", &["index.js", "index.html"]);

    let pages = discover_pages(dir.path()).unwrap();
    assert_eq!(pages.entries().pages().collect::<Vec<_>>(), ["home"]);
    assert_eq!(pages.html().len(), 1);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_next_to_entry_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "home", &["index.js", "index.html"]);
    std::os::unix::fs::symlink(
        dir.path().join("gone"),
        dir.path().join("home").join(".#index.html"),
    )
    .unwrap();

    let pages = discover_pages(dir.path()).unwrap();
    assert_eq!(pages.entries().pages().collect::<Vec<_>>(), ["home"]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_under_root_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "home", &["index.js", "index.html"]);
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("notes.md")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("promo")).unwrap();

    let pages = discover_pages(dir.path()).unwrap();
    assert_eq!(pages.entries().pages().collect::<Vec<_>>(), ["home"]);
}

#[cfg(unix)]
#[test]
fn dangling_entry_symlink_is_reported() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "home", &["index.html"]);
    std::os::unix::fs::symlink(
        dir.path().join("gone.js"),
        dir.path().join("home").join("index.js"),
    )
    .unwrap();

    let err = discover_pages(dir.path()).unwrap_err();
    assert!(matches!(err, DiscoveryError::Walk { .. }));
}

#[cfg(unix)]
#[test]
fn unreadable_root_is_reported() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let root = dir.path().join("src");
    write_page(&root, "home", &["index.js", "index.html"]);
    fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not bind a privileged user.
    let result = fs::read_dir(&root)
        .is_err()
        .then(|| discover_pages(&root));
    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();

    if let Some(result) = result {
        assert!(matches!(result, Err(DiscoveryError::Walk { .. })));
    }
}

#[test]
fn repeated_discovery_is_stable() {
    let dir = TempDir::new().unwrap();
    for name in ["x", "y", "z"] {
        write_page(dir.path(), name, &["index.js", "index.html"]);
    }

    let first = discover_pages(dir.path()).unwrap();
    let second = discover_pages(dir.path()).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn discovery_finds_exactly_the_created_pages(
        names in prop::collection::btree_set("[a-z][a-z0-9_-]{0,8}", 0..6),
        orphans in prop::collection::btree_set("[A-Z][a-z]{0,4}", 0..3),
    ) {
        let dir = TempDir::new().unwrap();
        for name in &names {
            write_page(dir.path(), name, &["index.js", "index.html"]);
        }
        for orphan in &orphans {
            write_page(dir.path(), orphan, &["index.html"]);
        }

        let first = discover_pages(dir.path()).unwrap();
        let second = discover_pages(dir.path()).unwrap();

        let found: BTreeSet<String> = first.entries().pages().map(str::to_string).collect();
        prop_assert_eq!(&found, &names);

        let again: BTreeSet<String> = second.entries().pages().map(str::to_string).collect();
        prop_assert_eq!(&found, &again);
        for (name, path) in first.entries() {
            prop_assert_eq!(second.entries().get(name), Some(path.as_path()));
        }

        prop_assert_eq!(first.html().len(), names.len());
        for directive in first.html() {
            prop_assert_eq!(&directive.output_filename, &format!("{}.html", directive.page_name));
        }
    }
}
