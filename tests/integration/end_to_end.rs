use std::{fs, path::Path};

use file_pairs_shared_kernel::{DomainError, FilePairsError, MatchStrategy};
use find_file_pairs::{Config, run};
use tempfile::TempDir;

fn workspace(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for rel in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }
    dir
}

fn config(data: &Path, source: &str, xml: &str, out: &Path, relative: bool) -> Config {
    Config {
        data_path: data.to_string_lossy().into_owned(),
        source_pattern: source.to_string(),
        xml_pattern: xml.to_string(),
        output: out.to_path_buf(),
        use_relative_paths: relative,
        limit: None,
    }
}

#[test]
fn pairs_by_directory_with_absolute_paths() {
    let dir = workspace(&["a/s.pdf", "a/s.xml", "b/t.pdf", "b/t.xml"]);
    let out = dir.path().join("out/pairs.csv");

    let summary = run(&config(dir.path(), "*/*.pdf", "*/*.xml", &out, false)).unwrap();

    let base = dir.path().display();
    assert_eq!(summary.strategy, Some(MatchStrategy::ParentDirectory));
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!("source_url,xml_url\n{base}/a/s.pdf,{base}/a/s.xml\n{base}/b/t.pdf,{base}/b/t.xml\n")
    );
}

#[test]
fn pairs_by_name_across_directories() {
    let dir = workspace(&["pdf/doc1.pdf", "pdf/doc2.pdf", "xml/doc1.xml.gz", "xml/doc2.xml.gz"]);
    let out = dir.path().join("pairs.tsv");

    let summary = run(&config(dir.path(), "pdf/*.pdf", "xml/*.xml.gz", &out, true)).unwrap();

    assert_eq!(summary.strategy, Some(MatchStrategy::NameWithoutExtension));
    assert_eq!(summary.pair_count, 2);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "source_url\txml_url\npdf/doc1.pdf\txml/doc1.xml.gz\npdf/doc2.pdf\txml/doc2.xml.gz\n"
    );
}

#[test]
fn mismatch_leaves_no_output() {
    let dir = workspace(&["x/doc1.pdf", "z/doc1.pdf", "y/doc1.xml"]);
    let out = dir.path().join("pairs.csv");

    let err = run(&config(dir.path(), "*/*.pdf", "*/*.xml", &out, false)).unwrap_err();

    let root = err.downcast_ref::<FilePairsError>().map(FilePairsError::root);
    assert!(matches!(root, Some(FilePairsError::Domain(DomainError::UnresolvedGroupMismatch { .. }))));
    assert!(!out.exists());
}

#[test]
fn failed_run_keeps_previous_manifest() {
    let dir = workspace(&["x/doc1.pdf", "z/doc1.pdf", "y/doc1.xml"]);
    let out = dir.path().join("pairs.csv");
    fs::write(&out, "previous").unwrap();

    assert!(run(&config(dir.path(), "*/*.pdf", "*/*.xml", &out, false)).is_err());
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn nothing_found_writes_header_only() {
    let dir = workspace(&[]);
    let out = dir.path().join("pairs.csv");

    let summary = run(&config(dir.path(), "*/*.pdf", "*/*.xml", &out, true)).unwrap();

    assert_eq!(summary.pair_count, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "source_url,xml_url\n");
}

#[test]
fn rerun_produces_identical_bytes() {
    let dir = workspace(&["a/s.pdf", "a/s.xml"]);
    let out = dir.path().join("pairs.csv");
    let cfg = config(dir.path(), "*/*.pdf", "*/*.xml", &out, true);

    run(&cfg).unwrap();
    let first = fs::read(&out).unwrap();
    run(&cfg).unwrap();

    assert_eq!(fs::read(&out).unwrap(), first);
    assert_eq!(first, b"source_url,xml_url\na/s.pdf,a/s.xml\n");
}
