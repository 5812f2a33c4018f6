//! Watch mode — re-run the conversion when the input file changes.
//!
//! Plain mtime polling with an explicit debounce: after a change is seen,
//! a fixed quiet period passes before the callback fires and the mtime is
//! re-read, so an editor's rapid write bursts collapse into one run. The
//! callback never overlaps itself; the loop is strictly serial.

use std::path::Path;
use std::time::{Duration, SystemTime};

/// How often the input file's mtime is sampled.
pub const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Quiet period after a detected change before re-converting.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Check whether the file changed since `last`, updating `last` when it
/// did. A momentarily unreadable file (editor mid-save) counts as
/// unchanged rather than an error.
pub fn has_changed(path: &Path, last: &mut SystemTime) -> bool {
    match modified(path) {
        Ok(mtime) if mtime != *last => {
            *last = mtime;
            true
        }
        _ => false,
    }
}

/// Block forever, invoking `on_change` after each debounced change of the
/// watched file. Only returns if the initial mtime cannot be read.
pub fn watch_file<F: FnMut()>(path: &Path, mut on_change: F) -> Result<(), String> {
    let mut last = modified(path)
        .map_err(|e| format!("cannot watch {}: {}", path.display(), e))?;

    loop {
        std::thread::sleep(POLL_INTERVAL);
        if has_changed(path, &mut last) {
            // Let the write burst settle, then take the final stamp so the
            // run sees the complete file.
            std::thread::sleep(DEBOUNCE_WINDOW);
            let _ = has_changed(path, &mut last);
            on_change();
        }
    }
}

fn modified(path: &Path) -> Result<SystemTime, String> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| e.to_string())
}
