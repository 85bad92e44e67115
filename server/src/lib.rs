pub mod config;
pub mod db;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

pub use state::{AppState, Clock};
