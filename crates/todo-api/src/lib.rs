#![warn(missing_docs)]

//! Todo List RESTful API
//!
//! Exposes the todo list use cases over HTTP: item CRUD, progress
//! registration, the fixed-width progress report and an OpenAPI document.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use server::ApiServer;
pub use state::AppState;
