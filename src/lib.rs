//! ZMODA stylist
//!
//! Personalized outfit color advice, served over HTTP.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
