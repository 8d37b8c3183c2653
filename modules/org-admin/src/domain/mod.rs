pub mod fields;
pub mod filters;
pub mod models;
pub mod service;
