//! Configuration loading and management for the Vacation Entitlement Engine.
//!
//! This module loads the work-day calendar configuration (region and public
//! holidays) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendar for: {}", config.region());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::CalendarConfig;
