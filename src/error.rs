use std::path::PathBuf;

/// Library-level structured errors for config lookups.
///
/// A missing config file is not an error: lookups return `Ok(None)` for that.
/// The CLI binary wraps these with `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
	#[error("No project root found above {start}")]
	RootNotFound { start: PathBuf },

	#[error("Failed to get current directory")]
	CurrentDir {
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to stat config candidate: {path}")]
	Stat {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Unknown encoding: {name} (expected one of ascii, utf8, utf-8, utf16le, utf-16le, ucs2, ucs-2, base64)")]
	UnknownEncoding { name: String },
}

/// Result type alias using LocatorError.
pub type Result<T> = std::result::Result<T, LocatorError>;
