use std::time::Duration;
use anyhow::Context;
use async_trait::async_trait;
use bb8_postgres::bb8::{Pool, PooledConnection};
use bb8_postgres::PostgresConnectionManager;
use bb8_postgres::tokio_postgres::{NoTls, Row};
use serde_json::Value;
use tracing::{info, warn};
use crate::config::Config;
use crate::errors::StoreError;
use crate::models::reservation::Reservation;
use crate::repositories::ReservationStore;

pub type PostgresPool = Pool<PostgresConnectionManager<NoTls>>;

const CREATE_COLLECTION_STMT: &str = "CREATE TABLE IF NOT EXISTS reservations \
    (id BIGSERIAL PRIMARY KEY, document JSONB NOT NULL);";
const FIND_ALL_STMT: &str = "SELECT document FROM reservations ORDER BY id;";
const INSERT_ONE_STMT: &str = "INSERT INTO reservations (document) VALUES ($1);";

pub async fn build_pool(config: &Config) -> anyhow::Result<PostgresPool> {
    let manager = PostgresConnectionManager::new_from_stringlike(&config.database_url, NoTls)
        .context("Invalid DATABASE_URL")?;

    Pool::builder()
        .max_size(config.database_pool_size)
        .connection_timeout(Duration::from_secs(config.database_timeout_secs))
        .build(manager)
        .await
        .context("Failed to connect to the reservations database")
}

/// Reservations kept as JSONB documents, one row per reservation.
pub struct PostgresReservationRepo {
    postgres_connection: PostgresPool,
}

impl PostgresReservationRepo {
    pub fn new(
        postgres_connection: PostgresPool,
    ) -> Self {
        Self {
            postgres_connection
        }
    }

    async fn get_postgres_connection(
        &self,
    ) -> Result<PooledConnection<'_, PostgresConnectionManager<NoTls>>, StoreError> {
        self.postgres_connection.get().await.map_err(|e| {
            warn!("Failed to retrieve postgres connection due to: {}", e);
            StoreError::from(e)
        })
    }

    /// Creates the backing table on first use, like a document collection.
    pub async fn ensure_collection(&self) -> Result<(), StoreError> {
        let conn = self.get_postgres_connection().await?;
        conn.batch_execute(CREATE_COLLECTION_STMT).await?;
        info!("Reservations collection is ready");
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for PostgresReservationRepo {
    async fn find_all(&self) -> Result<Vec<Reservation>, StoreError> {
        let conn = self.get_postgres_connection().await?;
        let rows = conn.query(FIND_ALL_STMT, &[]).await?;

        rows.into_iter()
            .map(parse_row_into_reservation)
            .collect()
    }

    async fn insert_one(&self, reservation: &Reservation) -> Result<(), StoreError> {
        let conn = self.get_postgres_connection().await?;
        let document = serde_json::to_value(reservation)?;

        conn.execute(INSERT_ONE_STMT, &[&document]).await?;
        Ok(())
    }

    async fn insert_many(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        let mut conn = self.get_postgres_connection().await?;
        let tx = conn.transaction().await?;
        let stmt = tx.prepare(INSERT_ONE_STMT).await?;

        for reservation in reservations {
            let document = serde_json::to_value(reservation)?;
            tx.execute(&stmt, &[&document]).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

fn parse_row_into_reservation(row: Row) -> Result<Reservation, StoreError> {
    let document: Value = row.try_get("document")?;
    Ok(serde_json::from_value(document)?)
}
