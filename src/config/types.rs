use crate::config::encoding::Encoding;
use serde::Deserialize;
use std::path::PathBuf;

/// Default name of the source directory probed under the project root.
pub const DEFAULT_SRC_DIR_NAME: &str = "src";

/// Name of the conventional config directory probed under the root and the
/// source directory.
pub const CONFIG_DIR_NAME: &str = "config";

/// Options for a single config lookup.
///
/// Shared by [`read_config`](crate::config::ConfigResolver::read_config) and
/// [`config_path`](crate::config::ConfigResolver::config_path); the path
/// lookup never reads the file and ignores `encoding`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LookupOptions {
	/// Consult and populate the resolver's cache. Defaults to `true`.
	pub cache: bool,

	/// Source directory segment used by the second and fourth candidates.
	/// Defaults to `"src"`. Not part of the cache key.
	pub src_dir_name: String,

	/// Encoding used to decode file contents. Defaults to UTF-8.
	pub encoding: Encoding,
}

impl Default for LookupOptions {
	fn default() -> Self {
		Self {
			cache: true,
			src_dir_name: DEFAULT_SRC_DIR_NAME.to_string(),
			encoding: Encoding::default(),
		}
	}
}

/// Outcome of probing a single candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
	/// A regular file exists at the path.
	File,

	/// Something exists at the path but it is not a regular file.
	NotFile,

	/// Nothing exists at the path.
	Missing,
}

/// A candidate path together with what was found there.
#[derive(Debug, Clone)]
pub struct Candidate {
	/// Absolute path that was probed.
	pub path: PathBuf,

	/// What the probe found.
	pub outcome: ProbeOutcome,
}
