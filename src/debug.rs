//! Debug log for extraction runs
//!
//! Debug builds append timestamped lines to `vogix-palette-debug.log` in the
//! working directory. Release builds compile every function to a no-op.

use std::path::Path;
#[cfg(debug_assertions)]
use std::{fs::File, io::Write, sync::Mutex};

#[cfg(debug_assertions)]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

#[cfg(debug_assertions)]
const LOG_FILE_NAME: &str = "vogix-palette-debug.log";

/// Open the log file; later calls keep the first handle
#[cfg(debug_assertions)]
pub fn init() {
    let Ok(mut guard) = LOG_FILE.lock() else {
        return;
    };
    if guard.is_some() {
        return;
    }
    let opened = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME);
    if let Ok(file) = opened {
        *guard = Some(file);
        drop(guard);
        log("=== vogix-palette run ===");
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}

/// Append one line; silently skipped before `init` or on write errors
#[cfg(debug_assertions)]
pub fn log(message: &str) {
    let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let Ok(mut guard) = LOG_FILE.lock() else {
        return;
    };
    if let Some(file) = guard.as_mut() {
        let _ = writeln!(file, "[{stamp}] {message}");
    }
}

#[cfg(not(debug_assertions))]
pub fn log(_message: &str) {}

/// Log under a category tag such as `EXTRACT` or `BATCH`
pub fn log_category(category: &str, message: &str) {
    if cfg!(debug_assertions) {
        log(&format!("[{category}] {message}"));
    }
}

/// Log a file written or read by a command
pub fn log_file(operation: &str, path: &Path) {
    if cfg!(debug_assertions) {
        log(&format!("[FILE] {operation} {}", path.display()));
    }
}

#[cfg(all(test, debug_assertions))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[test]
    #[serial]
    fn test_lines_are_tagged_and_timestamped() {
        let original_dir = env::current_dir().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        env::set_current_dir(&temp_dir).unwrap();

        init();
        log_category("EXTRACT", "aikido: dark=16 light=16 warnings=0");
        log_file("wrote", Path::new("themes/aikido.nix"));
        let written = fs::read_to_string(LOG_FILE_NAME).unwrap();

        env::set_current_dir(&original_dir).unwrap();

        assert!(written.contains("] [EXTRACT] aikido: dark=16 light=16 warnings=0\n"));
        assert!(written.contains("] [FILE] wrote themes/aikido.nix\n"));
        assert!(written.lines().all(|line| line.starts_with('[')));
    }
}
