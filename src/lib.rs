pub mod config;
pub mod handlers;
pub mod inventory;
pub mod models;
pub mod routes;
