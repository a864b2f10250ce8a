pub mod config;
pub mod errors;
pub mod service;
pub mod structs;
