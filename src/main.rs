use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::{Command, Config};
use crate::controller::AppState;
use crate::repositories::postgres_repo::{build_pool, PostgresReservationRepo};
use crate::services::reservation_service::ReservationService;

pub mod config;
pub mod controller;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod timeslots;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting reservations service in {} environment", config.environment);

    let postgres_connection = build_pool(&config).await?;
    let postgres_repo = Arc::new(PostgresReservationRepo::new(postgres_connection));
    postgres_repo.ensure_collection().await?;

    match config.command() {
        Command::Seed => {
            seed::seed_store(postgres_repo.as_ref()).await?;
        }
        Command::Serve => {
            let app_state = AppState {
                reservation_service: Arc::new(ReservationService::new(postgres_repo)),
            };
            controller::serve(app_state, &config).await?;
        }
    }

    info!("Reservations service stopped");
    Ok(())
}
