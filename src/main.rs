//! # VetManager
//!
//! Clinic management service: clients, pets, appointments, medical records,
//! invoices and reviews over a SQLite store. This binary is the composition
//! root: it wires configuration, logging, the repositories and the domain
//! services, then seeds sample data and guarantees the default
//! administrator account exists.

pub mod config;
pub mod consts;
pub mod errors;
pub mod logger;
pub mod models;
pub mod repo;
pub mod services;
pub mod utils;
pub mod validators;

use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = &*config::APP_CONFIG;

    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool(&app_config.db_host).await?,
    };
    sqlite_repo.init_schema().await?;

    let clinic_service = services::clinic::ClinicService::new(
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
    );
    let auth_service = services::auth::AuthService::new(Box::new(sqlite_repo.clone()));

    let seeder = services::seeder::DataSeeder::new(
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
        Box::new(sqlite_repo.clone()),
    );
    seeder.seed().await?;

    auth_service.create_admin_if_not_exists().await?;

    let clients = clinic_service.list_clients().await?;
    let pets = clinic_service.list_pets().await?;
    let appointments = clinic_service.list_appointments().await?;
    info!(
        "Servicio listo ({}): {} clientes, {} mascotas, {} citas",
        app_config.env,
        clients.len(),
        pets.len(),
        appointments.len()
    );

    Ok(())
}
