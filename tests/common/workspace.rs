use std::fs;
use std::path::PathBuf;

/// Creates a fresh scratch directory unique to `tag` under the system temp
/// dir. Any leftovers from a previous run are removed first.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("greyscale-{tag}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("failed to clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}
