pub mod config;
pub mod dashboard;
pub mod entry;
pub mod export;
pub mod login;
pub mod remote;
