pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
pub mod terminal;
