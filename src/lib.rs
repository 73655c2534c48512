//! Northwoods Housing - directory of housing-security resources for
//! Northern Michigan.
//!
//! A PostgreSQL/PostGIS backed HTTP API for shelters, food pantries, propane
//! suppliers and other services, with community reports, verification
//! history, and anonymous risk assessments.

pub mod cli;
pub mod config;
pub mod models;
pub mod repository;
pub mod schema;
pub mod server;
