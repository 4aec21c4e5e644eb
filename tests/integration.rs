use dirbundle::config::Config;
use dirbundle::{BundleBuilder, Entry, bundle, output};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join(".hidden"), "secret").unwrap();
    fs::write(dir.path().join("notes.log"), "log noise").unwrap();
    fs::write(dir.path().join("data.bin"), vec![0u8, 159, 146, 150]).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "world").unwrap();
    fs::create_dir(dir.path().join("sub/.git")).unwrap();
    fs::write(dir.path().join("sub/.git/config"), "[core]").unwrap();

    let config = Config {
        output_name: "directorycontents.json".into(),
        ignore_patterns: vec!["*.log".into()],
    };
    // A leftover bundle from an earlier run must not bundle itself.
    fs::write(dir.path().join("directorycontents.json"), "[]").unwrap();

    let options = BundleBuilder::new(dir.path())
        .ignore_patterns(config.effective_ignore_patterns())
        .build();
    let entries = bundle(options).unwrap();

    let names: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);
    assert_eq!(entries[0].directory, ".");
    assert_eq!(entries[0].content, "hello");
    assert_eq!(entries[1].directory, "sub");
    assert_eq!(entries[1].content, "world");

    // JSON round-trip preserves every entry byte for byte.
    let json = output::to_json(&entries, true).unwrap();
    let parsed: Vec<Entry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entries);
}
#[test]
fn integration_empty_root_writes_empty_array() {
    let dir = tempdir().unwrap();
    let entries = bundle(BundleBuilder::new(dir.path()).build()).unwrap();
    let out_path = dir.path().join("directorycontents.json");
    output::write_to_file(&entries, &out_path, true).unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "[]\n");
}
#[test]
fn integration_rebundle_is_stable() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/nested")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("src/nested/lib.rs"), "pub fn lib() {}").unwrap();
    fs::write(dir.path().join("README.md"), "# readme").unwrap();

    let config = Config::default();
    let build = || {
        bundle(
            BundleBuilder::new(dir.path())
                .ignore_patterns(config.effective_ignore_patterns())
                .build(),
        )
        .unwrap()
    };
    let first = build();
    output::write_to_file(&first, dir.path().join(&config.output_name), true).unwrap();

    // The freshly written bundle is implicitly excluded from the second run.
    let second = build();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}
