pub mod app;
pub mod config;
pub mod error;
pub mod gpio;
pub mod handler;
pub mod mqtt;
