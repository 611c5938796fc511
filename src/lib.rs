pub mod address;
pub mod config;
pub mod error;
pub mod faker;
pub mod format;
pub mod generator;
pub mod store;
pub mod types;
pub mod website;
