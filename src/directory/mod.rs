pub mod apis;
pub mod errors;
pub mod models;
pub mod service;
pub mod source;
