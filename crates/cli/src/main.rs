use std::env;

use anyhow::Context;
use client::Portal;
use domain::Role;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let base_url =
        env::var("PORTAL_BASE_URL").unwrap_or("http://localhost:8000/api".to_string());
    let username = env::var("PORTAL_USERNAME").context("PORTAL_USERNAME is not set")?;
    let password = env::var("PORTAL_PASSWORD").context("PORTAL_PASSWORD is not set")?;

    let portal = match env::var("PORTAL_SESSION_FILE") {
        Ok(path) => Portal::with_session_file(&base_url, path)?,
        Err(_) => Portal::new(&base_url)?,
    };

    let landing = portal.login(&username, &password).await?;
    tracing::info!("Login ok, landing at {}", landing.path());

    let profile = portal.profile().await?;
    tracing::info!(
        "Profile: {} <{}> role={}",
        profile.username,
        profile.email.as_deref().unwrap_or("-"),
        profile.role
    );

    match profile.role {
        Role::Patient => {
            let appointments = portal.my_appointments().await?;
            tracing::info!("{} appointment(s)", appointments.len());
            for appointment in &appointments {
                tracing::info!(
                    "  {} {} [{:?}]",
                    appointment.date,
                    appointment.time_slot,
                    appointment.status
                );
            }

            let prescriptions = portal.patient_prescriptions().await?;
            tracing::info!("{} prescription(s)", prescriptions.len());

            let reports = portal.my_reports().await?;
            tracing::info!(
                "{} report(s), summary {}",
                reports.reports.len(),
                if reports.summary_pdf.is_some() { "ready" } else { "pending" }
            );
        }
        Role::Doctor => {
            let queue = portal.doctor_appointments().await?;
            tracing::info!("{} appointment(s) in the queue", queue.len());

            let availability = portal.availability().await?;
            for slot in &availability {
                tracing::info!("  {} {}-{}", slot.weekday, slot.start_time, slot.end_time);
            }
        }
        Role::Admin => {
            tracing::info!("Admin account; nothing further to list");
        }
    }

    portal.logout().await?;
    tracing::info!("Logged out");
    Ok(())
}
