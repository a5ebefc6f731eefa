//! Utility helpers — path resolution and string manipulation.

use std::path::PathBuf;

/// Get the GoBarber data directory (e.g. `~/.gobarber/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".gobarber")
}

/// Get the default key-value store file (e.g. `~/.gobarber/storage.json`).
pub fn get_storage_path() -> PathBuf {
    get_data_path().join("storage.json")
}

/// Get the prompt history file (e.g. `~/.gobarber/history/cli_history`).
pub fn get_history_path() -> PathBuf {
    get_data_path().join("history").join("cli_history")
}

/// Truncate a string to `max_len` characters, adding "..." if truncated.
/// Unicode-safe.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Expand `~` to the home directory in a path string.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(rest)
    } else if path == "~" {
        home_dir().unwrap_or_else(|| PathBuf::from("."))
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_string("Ana", 10), "Ana");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate_string("Barbearia do Joaquim e Filhos", 15);
        assert_eq!(result, "Barbearia do...");
        assert_eq!(result.chars().count(), 15);
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate_string("Conceição Araújo", 8), "Conce...");
    }

    #[test]
    fn test_expand_home_tilde() {
        let expanded = expand_home("~/test/path");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.to_str().unwrap().ends_with("test/path"));
    }

    #[test]
    fn test_expand_home_absolute() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_data_path_ends_with_gobarber() {
        assert!(get_data_path().ends_with(".gobarber"));
    }

    #[test]
    fn test_storage_and_history_paths() {
        let storage = get_storage_path();
        assert!(storage.ends_with("storage.json"));
        assert!(storage.parent().unwrap().ends_with(".gobarber"));

        let history = get_history_path();
        assert!(history.to_string_lossy().contains(".gobarber"));
        assert!(history.ends_with("cli_history"));
    }
}
