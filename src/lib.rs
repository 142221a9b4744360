pub mod app;
pub mod auth;
pub mod checkin;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod plans;
pub mod seed;
pub mod state;
pub mod stats;
pub mod storage;
pub mod templates;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, open_store};
