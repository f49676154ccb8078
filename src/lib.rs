pub mod config;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;
