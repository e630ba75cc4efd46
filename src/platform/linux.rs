// snaplink platform paths for Linux
// Data: ~/.local/share/snaplink

use std::env;
use std::path::PathBuf;

/// Returns the data directory for snaplink on Linux.
/// Uses `$XDG_DATA_HOME/snaplink` if set, otherwise `~/.local/share/snaplink`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("snaplink")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("snaplink")
    }
}
