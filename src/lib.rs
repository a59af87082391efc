//! config-locator - find and read a project's config file.
//!
//! This library provides:
//! - Project root discovery by walking up to a marker file
//! - A fixed four-location search for a config file under that root
//! - Contents decoding with a small set of text encodings
//! - An explicit cache of resolved contents and paths
//!
//! # Example
//!
//! ```no_run
//! use config_locator::config::{ConfigResolver, LookupOptions};
//!
//! # async fn run() -> config_locator::Result<()> {
//! let resolver = ConfigResolver::from_current_dir();
//! let options = LookupOptions::default();
//!
//! // Probes ./app.json, ./src/app.json, ./config/app.json, ./src/config/app.json
//! if let Some(path) = resolver.config_path("app.json", &options).await? {
//!     println!("Using config at {}", path.display());
//! }
//!
//! let _contents = resolver.read_config("app.json", &options).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod root;

pub use error::{LocatorError, Result};
