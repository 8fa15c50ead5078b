//! Administrative service for web server site configurations.

pub mod admin;
pub mod auth;
pub mod config;
pub mod observability;
pub mod sites;
pub mod system;

pub use admin::{setup_admin_router, AppState};
pub use config::AppConfig;
pub use sites::SiteStore;
