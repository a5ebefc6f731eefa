//! `gobarber status` — show configuration and session status.

use anyhow::Result;
use colored::Colorize;

use gobarber_core::config::{get_config_path, load_config};

use crate::app::App;

/// Run the status command.
pub async fn run() -> Result<()> {
    let config_path = get_config_path();
    let config = load_config(None);

    println!();
    println!("{}", "✂ GoBarber Status".cyan().bold());
    println!();

    println!(
        "  {:<12} {} {}",
        "Config:".bold(),
        config_path.display(),
        found(config_path.exists())
    );

    let store_path = config.storage.resolved_path();
    println!(
        "  {:<12} {} {}",
        "Storage:".bold(),
        store_path.display(),
        found(store_path.exists())
    );

    println!("  {:<12} {}", "API:".bold(), config.api.base_url);
    let timeout = match config.api.timeout_secs {
        Some(secs) => format!("{secs}s"),
        None => "none".to_string(),
    };
    println!("  {:<12} {}", "Timeout:".bold(), timeout.dimmed());

    println!();
    let app = App::start(config).await?;
    let session = match app.session()?.user() {
        Some(user) => format!("{} signed in as {} <{}>", "✓".green(), user.name, user.email),
        None => format!("{}", "· signed out".dimmed()),
    };
    println!("  {:<12} {}", "Session:".bold(), session);
    println!();

    Ok(())
}

fn found(exists: bool) -> String {
    if exists {
        "✓".green().to_string()
    } else {
        "(not found)".red().to_string()
    }
}
