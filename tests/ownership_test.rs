mod fixtures;

use pretty_assertions::assert_eq;
use xcresult_owners::ownership::{
    load_repository_rules, resolve_file_owners, source_files, OwnershipOptions,
};

use fixtures::{sample_file, sample_repository};

fn expected() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("Package.swift", vec!["@package-file-owner"]),
        ("Sources/ModuleA/Folder1/Folder1-File1.swift", vec!["@module-a-default-owner"]),
        ("Sources/ModuleA/Folder1/Folder1-File2.swift", vec!["@module-a-default-owner"]),
        ("Sources/ModuleA/Folder1/Folder1-File3.swift", vec!["@module-a-file-3-owner"]),
        ("Sources/ModuleA/Folder1/SubfolderA/SubfolderA.File1.swift", vec!["@module-a-default-owner"]),
        ("Sources/ModuleA/Folder1/SubfolderA/SubfolderA.File3.swift", vec!["@module-a-file-3-owner"]),
        ("Sources/ModuleA/Folder1/SubfolderB/SubfolderB.File2.swift", vec!["@module-a-default-owner"]),
        ("Sources/ModuleA/Folder1/SubfolderB/SubfolderB.File3.swift", vec!["@module-a-file-3-owner"]),
        ("Sources/ModuleA/Folder2/Folder2-File1.swift", vec!["@module-a-default-owner"]),
        ("Sources/ModuleA/Folder2/Folder2-File3.swift", vec!["@module-a-folder-2-file-3-owner"]),
        ("Sources/ModuleA/ModuleA-File1.swift", vec!["@module-a-default-owner"]),
        ("Sources/ModuleB/ModuleB-File1.swift", vec!["@module-b-default-owner"]),
        ("Sources/ModuleB/ModuleB-File2.swift", vec!["@module-b-default-owner"]),
        (
            "Tests/ModuleATests/SampleSwiftTests.swift",
            vec!["@module-a-default-owner", "@module-b-default-owner"],
        ),
        (
            "Tests/ModuleBTests/SampleSwiftTests.swift",
            vec!["@module-a-default-owner", "@module-b-default-owner"],
        ),
    ]
}

#[test]
fn test_resolves_every_sample_file() {
    let owned = resolve_file_owners(&sample_repository(), &OwnershipOptions::default()).unwrap();

    for (relative, owners) in expected() {
        let path = sample_file(relative);
        let file = owned
            .iter()
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("missing {relative}"));
        assert_eq!(
            file.owners,
            Some(owners.iter().map(|s| s.to_string()).collect::<Vec<_>>()),
            "owners of {relative}"
        );
    }
}

#[test]
fn test_unowned_file_is_reported_without_owners() {
    let owned = resolve_file_owners(&sample_repository(), &OwnershipOptions::default()).unwrap();
    let orphan = owned
        .iter()
        .find(|f| f.path == sample_file("Scripts/Orphan.swift"))
        .unwrap();
    assert_eq!(orphan.owners, None);
}

#[test]
fn test_build_products_and_other_extensions_are_skipped() {
    let files = source_files(&sample_repository(), &OwnershipOptions::default()).unwrap();

    assert!(!files.contains(&sample_file(".build/debug/Generated.swift")));
    assert!(!files.contains(&sample_file("README.md")));
    assert_eq!(files.len(), expected().len() + 1);
}

#[test]
fn test_custom_ignore_patterns_replace_defaults() {
    let options = OwnershipOptions {
        ignored_patterns: vec!["*/Sources/*".to_string()],
        ..OwnershipOptions::default()
    };
    let files = source_files(&sample_repository(), &options).unwrap();

    assert!(files.contains(&sample_file(".build/debug/Generated.swift")));
    assert!(files.iter().all(|f| !f.starts_with(sample_file("Sources"))));
}

#[test]
fn test_rules_resolve_paths_outside_the_walk() {
    let rules = load_repository_rules(&sample_repository(), &OwnershipOptions::default()).unwrap();

    assert_eq!(
        rules.resolve(&sample_file("Sources/ModuleB/NotYetWritten.swift")),
        Some(&["@module-b-default-owner".to_string()][..])
    );
    assert_eq!(rules.resolve(&sample_file("README.md")), None);
}
