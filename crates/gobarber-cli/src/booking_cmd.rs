//! `gobarber providers | availability | book` — appointment creation.

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use colored::Colorize;

use gobarber_core::schedule::{self, DaySchedule, HourSlot};
use gobarber_core::types::{Appointment, Provider};
use gobarber_core::utils::truncate_string;

use crate::app::App;
use crate::helpers::{self, describe_api_error};

pub async fn providers(app: &App) -> Result<()> {
    let user = app.require_user()?;
    let providers = fetch_providers(app).await?;

    helpers::print_header(&format!("Hi {}, pick your barber", user.first_name()));
    if providers.is_empty() {
        println!("  {}", "(no barbers yet)".dimmed());
    }
    for provider in &providers {
        println!(
            "  {:<24} {}",
            truncate_string(&provider.name, 24).bold(),
            provider.id.dimmed()
        );
    }
    println!();
    Ok(())
}

pub async fn availability(app: &App, provider_id: &str, date: NaiveDate) -> Result<()> {
    app.require_user()?;
    let day = fetch_day(app, provider_id, date).await?;

    helpers::print_header(&format!("Availability on {}", date.format("%A, %d %B")));
    if day.is_empty() {
        println!("  {}", "(no hours listed)".dimmed());
    } else {
        print_section("Morning", &day.morning);
        print_section("Afternoon", &day.afternoon);
    }
    println!();
    Ok(())
}

pub async fn book(app: &App, provider_id: &str, date: NaiveDate, hour: u32) -> Result<()> {
    let appointment = submit_booking(app, provider_id, date, hour).await?;
    let start = schedule::appointment_start(date, hour)
        .ok_or_else(|| anyhow!("invalid hour: {hour}"))?;

    helpers::print_header("Appointment booked");
    println!("  {}", schedule::confirmation_message(start));
    println!("  {}", format!("reference {}", appointment.id).dimmed());
    println!();
    Ok(())
}

fn print_section(title: &str, slots: &[HourSlot]) {
    println!("  {}", title.bold());
    if slots.is_empty() {
        println!("    {}", "(none)".dimmed());
        return;
    }
    let line: Vec<String> = slots
        .iter()
        .map(|slot| {
            if slot.available {
                slot.label.green().to_string()
            } else {
                slot.label.dimmed().strikethrough().to_string()
            }
        })
        .collect();
    println!("    {}", line.join("  "));
}

// ─────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────

async fn fetch_providers(app: &App) -> Result<Vec<Provider>> {
    app.client
        .list_providers()
        .await
        .map_err(|e| anyhow!("could not load barbers: {}", describe_api_error(&e)))
}

async fn fetch_day(app: &App, provider_id: &str, date: NaiveDate) -> Result<DaySchedule> {
    let slots = app
        .client
        .day_availability(provider_id, date)
        .await
        .map_err(|e| anyhow!("could not load availability: {}", describe_api_error(&e)))?;
    Ok(DaySchedule::from_availability(&slots))
}

/// Book `hour` on `date` after checking the slot is still free.
pub(crate) async fn submit_booking(
    app: &App,
    provider_id: &str,
    date: NaiveDate,
    hour: u32,
) -> Result<Appointment> {
    app.require_user()?;
    if schedule::appointment_start(date, hour).is_none() {
        bail!("invalid hour: {hour}");
    }

    let day = fetch_day(app, provider_id, date).await?;
    if !day.is_available(hour) {
        bail!("{hour:02}:00 is not available on {date}, see `gobarber availability`");
    }

    let request = schedule::appointment_request(provider_id, date, hour);
    app.client
        .create_appointment(&request)
        .await
        .map_err(|e| anyhow!("booking failed: {}", describe_api_error(&e)))
}
