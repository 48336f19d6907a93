pub mod capture;
pub mod config;
pub mod error;
pub mod replay;
pub mod stats;
