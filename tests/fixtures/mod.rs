#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use xcresult_owners::IndexSnapshot;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn sample_repository() -> PathBuf {
    fixtures_dir().join("sample_repo")
}

pub fn summary_path() -> PathBuf {
    fixtures_dir().join("summary.json")
}

/// The index fixture stores paths relative to a `{{ROOT}}` placeholder; this
/// writes a copy rooted at the sample repository into `dir`.
pub fn write_index(dir: &Path) -> PathBuf {
    let template = fs::read_to_string(fixtures_dir().join("sample_index.json")).unwrap();
    let root = sample_repository();
    let contents = template.replace("{{ROOT}}", &root.to_string_lossy());

    let path = dir.join("index.json");
    fs::write(&path, contents).unwrap();
    path
}

pub fn load_index() -> IndexSnapshot {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = write_index(temp_dir.path());
    IndexSnapshot::load(path).unwrap()
}

pub fn sample_file(relative: &str) -> PathBuf {
    sample_repository().join(relative)
}
