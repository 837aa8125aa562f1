use asset_viewer_api::AssetKind;
use asset_viewer_core::{AssetCatalog, ViewerError, classify, scan};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, relative.as_bytes()).unwrap();
}

#[test]
fn test_scan_then_classify_mixed_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    for file in ["model.glb", "skin.png", "notes.txt", "sub/door.gltf"] {
        write(&root, file);
    }

    let records = classify(scan(&root).unwrap(), &root);

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.filename.as_str(), r.kind, r.path.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("door.gltf", AssetKind::Model, "/sub/door.gltf"),
            ("model.glb", AssetKind::Model, "/model.glb"),
            ("skin.png", AssetKind::Texture, "/skin.png"),
        ]
    );
}

#[test]
fn test_served_paths_resolve_to_files() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    write(&root, "a/b/c/rock.webp");
    write(&root, "hero.v2.glb");

    for record in AssetCatalog::new(&root).list().unwrap() {
        let resolved = root.join(record.path.trim_start_matches('/'));
        assert!(resolved.is_file(), "{:?} does not resolve", record.path);
        assert_eq!(fs::read(&resolved).unwrap(), record.path[1..].as_bytes());
    }
}

#[test]
fn test_catalog_reflects_disk_changes() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let catalog = AssetCatalog::new(&root);
    write(&root, "first.png");

    assert_eq!(catalog.list().unwrap().len(), 1);

    write(&root, "nested/second.glb");
    fs::remove_file(root.join("first.png")).unwrap();

    let records = catalog.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "second");
}

#[test]
fn test_catalog_summary_counts() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    for file in ["a.glb", "b.jpg", "c.md", "d/e.bin"] {
        write(&root, file);
    }

    let (records, summary) = AssetCatalog::new(&root).list_with_summary().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(summary.total_files, 4);
    assert_eq!(summary.assets, 2);
    assert_eq!(summary.skipped_files, 2);
}

#[test]
fn test_relative_paths_include_every_file() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    for file in ["a.glb", "docs/readme.md"] {
        write(&root, file);
    }

    let mut paths = AssetCatalog::new(&root).list_relative_paths().unwrap();
    paths.sort();
    assert_eq!(paths, vec!["a.glb", "docs/readme.md"]);
}

#[test]
fn test_missing_root_fails_without_output() {
    let dir = tempdir().unwrap();
    let catalog = AssetCatalog::new(dir.path().join("gone"));

    assert!(matches!(catalog.list(), Err(ViewerError::DirectoryNotFound(_))));
    assert!(matches!(
        catalog.list_relative_paths(),
        Err(ViewerError::DirectoryNotFound(_))
    ));
}
