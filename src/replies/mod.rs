pub mod apis;
pub mod errors;
pub mod models;
pub mod sender;
pub mod service;
