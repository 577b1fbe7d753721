//! Common test utilities and helpers

use std::path::PathBuf;
use tempfile::TempDir;

/// The round-robin walkthrough: two types at priority 5, one at priority 3
pub const ROUND_ROBIN_SCENARIO: &str = r#"
history-size = 3

[[step]]
op = "insert"
priority = 5
type = 2
plays = 2
payload = "A"

[[step]]
op = "insert"
priority = 5
type = 2
payload = "B"

[[step]]
op = "insert"
priority = 5
type = 1
payload = "C"

[[step]]
op = "insert"
priority = 3
type = 1
payload = "D"

[[step]]
op = "drain"

[[step]]
op = "history"
"#;

/// Write `contents` to `name` inside a fresh temporary directory
///
/// The directory is removed when the returned guard is dropped.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
