//! Optional rewrite hooks.
//!
//! None of these are wired in by default; register the ones you want:
//!
//! ```
//! use urlnorm::{plugins, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register_pre(plugins::expand_msplinks);
//! registry.register_post(plugins::strip_directory_index);
//! registry.register_post(plugins::strip_www);
//! ```

pub mod indexes;
pub mod msplinks;
pub mod nowww;

// Re-export main functionality
pub use indexes::strip_directory_index;
pub use msplinks::expand_msplinks;
pub use nowww::strip_www;
