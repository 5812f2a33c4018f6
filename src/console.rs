//! Timestamped console output.
//!
//! Status lines carry a `[HH:MM:SS]` prefix so watch-mode runs are easy to
//! tell apart. Time math is hand-rolled from `SystemTime` (UTC, no chrono).

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as `HH:MM:SS`.
pub fn stamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let day_secs = secs % 86400;
    format!(
        "{:02}:{:02}:{:02}",
        day_secs / 3600,
        (day_secs % 3600) / 60,
        day_secs % 60
    )
}

/// Timestamped progress line.
pub fn status(msg: &str) {
    println!("[{}] {}", stamp(), msg);
}

/// Bare line, used for echoed output.
pub fn plain(msg: &str) {
    println!("{}", msg);
}

pub fn warn(msg: &str) {
    eprintln!("warning: {}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

/// Clear the terminal and home the cursor.
pub fn clear() {
    print!("\x1b[2J\x1b[H");
}
