pub mod poller;
pub mod render;
pub mod state;

pub use poller::StatusDashboard;
pub use render::render;
pub use state::{DashboardState, DashboardView, ERROR_MESSAGE};
