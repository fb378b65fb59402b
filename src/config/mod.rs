//! Configuration module for Robots-Recon
//!
//! Configuration is optional. Without a file, [`Config::default`] gives the
//! stock behavior: 5 second timeout, 200 character previews.
//!
//! # Example
//!
//! ```no_run
//! use robots_recon::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("recon.toml")).unwrap();
//! println!("Requests time out after {}s", config.probe.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ProbeConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
