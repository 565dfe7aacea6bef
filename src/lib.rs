pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pricing;
pub mod registry;
pub mod route;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

pub use config::Config;
pub use error::{AppError, AppResult, RideError};
pub use pricing::PricingConfig;
pub use registry::LocationRegistry;

/// Shared state: one registry and one pricing configuration for the whole process.
/// Lookups take read locks; upserts and settings updates take the write lock.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub registry: Arc<RwLock<LocationRegistry>>,
    pub pricing: Arc<RwLock<PricingConfig>>,
}
