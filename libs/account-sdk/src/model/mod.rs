pub mod account;
pub mod amount;
pub mod api;
pub mod config;
pub mod errors;
pub mod params;
