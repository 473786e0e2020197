use async_trait::async_trait;
use crate::errors::StoreError;
use crate::models::reservation::Reservation;

#[cfg(test)]
pub mod memory_repo;
pub mod postgres_repo;

/// Document collection holding reservations.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Every stored reservation, oldest first.
    async fn find_all(&self) -> Result<Vec<Reservation>, StoreError>;

    async fn insert_one(&self, reservation: &Reservation) -> Result<(), StoreError>;

    /// Inserts all of `reservations` or none of them.
    async fn insert_many(&self, reservations: &[Reservation]) -> Result<(), StoreError>;
}
