//! Gaming platform database schema initializer
//!
//! This crate bootstraps the platform's PostgreSQL database:
//! - Loads connection settings and credentials
//! - Applies the idempotent schema program from the `schema` crate
//! - Reports the outcome as a status-code envelope for the invoking platform

pub mod applier;
pub mod config;
pub mod db;
pub mod errors;
pub mod handler;
pub mod response;
pub mod secrets;
