use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use crate::errors::StoreError;
use crate::models::reservation::Reservation;
use crate::repositories::ReservationStore;

/// Keeps raw JSON documents so listing decodes them the way the database path does.
#[derive(Default)]
pub struct InMemoryReservationRepo {
    documents: Mutex<Vec<Value>>,
    offline: AtomicBool,
}

impl InMemoryReservationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<Reservation>) -> Self {
        let documents = documents
            .iter()
            .map(|reservation| serde_json::to_value(reservation).unwrap())
            .collect();
        Self::with_raw_documents(documents)
    }

    pub fn with_raw_documents(documents: Vec<Value>) -> Self {
        Self {
            documents: Mutex::new(documents),
            offline: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent call fail as if the database went away.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationRepo {
    async fn find_all(&self) -> Result<Vec<Reservation>, StoreError> {
        self.check_online()?;
        self.documents
            .lock()
            .await
            .iter()
            .map(|document| Ok(serde_json::from_value(document.clone())?))
            .collect()
    }

    async fn insert_one(&self, reservation: &Reservation) -> Result<(), StoreError> {
        self.check_online()?;
        let document = serde_json::to_value(reservation)?;
        self.documents.lock().await.push(document);
        Ok(())
    }

    async fn insert_many(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        self.check_online()?;
        let documents = reservations
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.documents.lock().await.extend(documents);
        Ok(())
    }
}
