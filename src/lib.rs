pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;

// Re-export commonly used items
pub use api::{ApiClient, ApiError, StatusSource};
pub use config::Config;
pub use dashboard::{render, DashboardState, DashboardView, StatusDashboard};
pub use error::{AppError, Result};
pub use models::StatusSnapshot;
