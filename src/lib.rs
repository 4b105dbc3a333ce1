pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod handlers;
    pub mod loader;
}
pub mod mvu {
    pub mod dashboard;
    pub mod runtime;
}
pub mod view {
    pub mod dashboard;
    pub mod index;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use error::DashboardError;
pub use model::StatsSnapshot;
