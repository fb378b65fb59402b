//! URL handling module for Robots-Recon
//!
//! This module validates the operator-supplied target site and resolves
//! disallowed paths against it.

mod resolve;
mod target;

pub use resolve::resolve_path;
pub use target::TargetSite;
