use anyhow::{anyhow, Context};
use tracing::info;
use crate::models::reservation::Reservation;
use crate::repositories::ReservationStore;
use crate::timeslots::generate_timeslots;

/// (room, timeslot index, reserved by, company)
const SAMPLE_RESERVATIONS: [(&str, usize, &str, &str); 5] = [
    ("Room A", 0, "John Doe", "TechCorp"),
    ("Room B", 3, "Jane Smith", "Innovate Inc"),
    ("Room C", 5, "Alice Brown", "Alpha Solutions"),
    ("Room A", 7, "Bob Johnson", "Beta Tech"),
    ("Room B", 9, "Emily Davis", "Gamma Group"),
];

pub fn sample_reservations(timeslots: &[String]) -> anyhow::Result<Vec<Reservation>> {
    SAMPLE_RESERVATIONS
        .iter()
        .map(|&(room, slot, reserved_by, company)| {
            let time = timeslots
                .get(slot)
                .ok_or_else(|| anyhow!("No timeslot at index {}", slot))?;
            Ok(Reservation::new(room, time.as_str(), reserved_by, company))
        })
        .collect()
}

pub async fn seed_store(store: &dyn ReservationStore) -> anyhow::Result<usize> {
    let reservations = sample_reservations(&generate_timeslots())?;

    store
        .insert_many(&reservations)
        .await
        .context("Failed to seed reservations")?;

    info!("Database seeded successfully!");
    Ok(reservations.len())
}
