//! Vacation Entitlement Engine
//!
//! This crate computes how many vacation days a person can still apply for,
//! given their annual leave account and their applications for leave. Carried
//! over days expire on April 1st unless marked as not expiring.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
