#![allow(non_snake_case)]

pub mod cli;
pub mod clients;
pub mod config;
pub mod models;
pub mod runtime;
pub mod service;
pub mod store;

use std::env;

// Returns the directory where the wish/event/theme blobs live.
// Defaults to a relative "./data" directory.
pub fn get_data_location() -> String {
    if let Ok(path) = env::var("WISH_DATA_LOCATION") {
        return path;
    }
    env::var("DB_LOCATION").unwrap_or("./data".to_string())
}
