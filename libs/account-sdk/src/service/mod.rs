pub mod account;
pub mod account_log;
pub mod amount;
pub mod logging;
pub mod request;
