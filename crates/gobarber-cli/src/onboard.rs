//! `gobarber onboard` — initialize configuration and data directory.
//!
//! - Creates `~/.gobarber/config.json` with defaults
//! - Creates the prompt history directory

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use gobarber_core::config::{load_config, save_config};
use gobarber_core::utils::get_data_path;

/// Run the onboard command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "✂ GoBarber — Setup".cyan().bold());
    println!();

    setup(&get_data_path())?;

    println!();
    println!(
        "{}",
        "  Setup complete! Run `gobarber sign-up` or `gobarber sign-in` to start.".green()
    );
    println!();
    Ok(())
}

fn setup(data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join("config.json");

    if config_path.exists() {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        let config = load_config(Some(&config_path)); // defaults
        save_config(&config, Some(&config_path))?;
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    }

    let history_dir = data_dir.join("history");
    std::fs::create_dir_all(&history_dir)?;
    println!("  {} history dir at {}", "✓".green(), history_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_creates_config_and_history() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path()).unwrap();

        let config_path = tmp.path().join("config.json");
        assert!(config_path.exists());
        assert!(tmp.path().join("history").is_dir());

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("baseUrl"));
    }

    #[test]
    fn setup_keeps_existing_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.json");
        std::fs::write(&config_path, r#"{"api":{"baseUrl":"https://api.example.com"}}"#).unwrap();

        setup(tmp.path()).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("https://api.example.com"));
    }
}
