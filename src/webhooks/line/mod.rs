pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod signature;

pub const SIGNATURE_HEADER: &str = "x-line-signature";
