//! Provider listing, day availability, and booking.

use chrono::{Datelike, NaiveDate};
use reqwest::Method;
use tracing::{debug, info};

use gobarber_core::error::ApiError;
use gobarber_core::types::{Appointment, AppointmentRequest, HourAvailability, Provider};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn list_providers(&self) -> Result<Vec<Provider>, ApiError> {
        let builder = self.request(Method::GET, "providers");
        let providers: Vec<Provider> = self.send("GET /providers", builder).await?;
        debug!(count = providers.len(), "providers loaded");
        Ok(providers)
    }

    /// Hour-by-hour availability of `provider_id` on `date`.
    pub async fn day_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HourAvailability>, ApiError> {
        let path = format!("providers/{provider_id}/day-availability");
        let builder = self.request(Method::GET, &path).query(&[
            ("year", date.year().to_string()),
            ("month", date.month().to_string()),
            ("day", date.day().to_string()),
        ]);
        self.send("GET /providers/:id/day-availability", builder)
            .await
    }

    pub async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let builder = self.request(Method::POST, "appointments").json(request);
        let appointment: Appointment = self.send("POST /appointments", builder).await?;
        info!(
            appointment_id = %appointment.id,
            provider_id = %appointment.provider_id,
            date = %appointment.date,
            "appointment created"
        );
        Ok(appointment)
    }
}
