pub mod config;
pub mod error;
pub mod qaplib;
pub mod yaml;
