//! HTTP surface of the attendance dashboard.
//!
//! Serves the rendered dashboard page, its JSON equivalents and a health
//! endpoint. Every request runs its own load-and-aggregate cycle.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::DashboardQuery;
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;
