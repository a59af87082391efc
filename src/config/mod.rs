//! Config file lookup under a project root.
//!
//! This module handles:
//! - Candidate path generation under the project root
//! - Regular-file probing in priority order
//! - Decoding file contents with a selectable encoding
//! - Memoizing contents and paths per config file name

pub mod cache;
pub mod encoding;
pub mod resolver;
pub mod search;
pub mod types;

pub use cache::ConfigCache;
pub use encoding::Encoding;
pub use resolver::ConfigResolver;
pub use search::{candidate_paths, find_config_file, probe_candidates};
pub use types::{
	CONFIG_DIR_NAME, Candidate, DEFAULT_SRC_DIR_NAME, LookupOptions, ProbeOutcome,
};
