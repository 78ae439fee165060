pub(crate) mod config;
pub(crate) mod dto;
pub mod handlers;
pub(crate) mod registry;
pub(crate) mod repo;

pub use config::{AdminFilter, AdminResource};
pub use registry::AdminRegistry;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
