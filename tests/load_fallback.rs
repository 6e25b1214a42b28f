//! Tests for loading trees with fallback to a caller-supplied default

use std::{
    fs,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use tempfile::TempDir;
use twenty_questions::{Node, TreeCodec, TreeStore, adapters::JsonFileRepository};

fn codec_for(path: impl Into<std::path::PathBuf>) -> TreeCodec {
    TreeCodec::new(Arc::new(JsonFileRepository::new()), path)
}

fn default_tree() -> Node {
    Node::new("DEFAULT")
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `load` with a subscriber recording everything at `warn` and above.
fn load_with_logs(codec: &TreeCodec, verbose: bool) -> (Option<Node>, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let root = tracing::subscriber::with_default(subscriber, || {
        codec.load(Some(default_tree()), verbose)
    });
    (root, logs.text())
}

#[test]
fn test_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let codec = codec_for(temp_dir.path().join("missing.json"));

    assert_eq!(codec.load(Some(default_tree()), false), Some(default_tree()));
}

#[test]
fn test_invalid_json_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("invalid.json");
    fs::write(&path, "{ invalid json: }").unwrap();

    assert_eq!(
        codec_for(path).load(Some(default_tree()), false),
        Some(default_tree())
    );
}

#[test]
fn test_directory_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("testdir");
    fs::create_dir(&dir).unwrap();

    assert_eq!(
        codec_for(dir).load(Some(default_tree()), true),
        Some(default_tree())
    );
}

#[test]
fn test_wrong_structure_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("weird.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert_eq!(
        codec_for(path).load(Some(default_tree()), false),
        Some(default_tree())
    );
}

#[test]
fn test_null_document_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("null.json");
    fs::write(&path, "null").unwrap();

    assert_eq!(
        codec_for(path).load(Some(default_tree()), false),
        Some(default_tree())
    );
}

#[test]
fn test_good_file_loads_root() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("good.json");
    fs::write(&path, r#"{"value":"Root","yes":null,"no":null}"#).unwrap();

    let root = codec_for(path).load(None, false).expect("tree should load");
    assert_eq!(root.value, "Root");
    assert!(root.is_leaf());
}

#[test]
fn test_store_keeps_none_without_default() {
    let temp_dir = TempDir::new().unwrap();
    let store = TreeStore::open(codec_for(temp_dir.path().join("missing.json")), None, true);
    assert!(store.root().is_none());
}

#[test]
fn test_verbose_fallback_warns_once_with_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ invalid json: }").unwrap();

    let (root, logs) = load_with_logs(&codec_for(&path), true);

    assert_eq!(root, Some(default_tree()));
    assert_eq!(logs.matches("unable to load/parse tree").count(), 1);
    assert!(logs.contains("WARN"));
    assert!(logs.contains(&path.display().to_string()));
}

#[test]
fn test_quiet_fallback_logs_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let codec = codec_for(temp_dir.path().join("missing.json"));

    let (root, logs) = load_with_logs(&codec, false);

    assert_eq!(root, Some(default_tree()));
    assert!(logs.is_empty(), "unexpected log output: {logs}");
}

#[test]
fn test_successful_load_logs_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("good.json");
    fs::write(&path, r#"{"value":"Root","yes":null,"no":null}"#).unwrap();

    let (root, logs) = load_with_logs(&codec_for(path), true);

    assert_eq!(root.unwrap().value, "Root");
    assert!(logs.is_empty());
}
