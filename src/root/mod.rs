//! Project root discovery.
//!
//! Lookups ask a [`RootFinder`] for the project root each time they miss the
//! cache. [`MarkerRootFinder`] walks up the directory tree looking for marker
//! entries; [`FixedRoot`] returns a known directory.

use crate::error::{LocatorError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Marker entries probed in each directory, in order, by default.
pub const DEFAULT_MARKERS: &[&str] = &["package.json", "Cargo.toml", ".git"];

/// Source of the absolute project root directory.
#[async_trait]
pub trait RootFinder: Send + Sync {
	/// Return the absolute project root, or fail if none can be found.
	async fn find_root(&self) -> Result<PathBuf>;
}

/// Finds the root by walking up from a start directory to the first directory
/// that contains one of the marker entries.
#[derive(Debug, Clone)]
pub struct MarkerRootFinder {
	/// Start directory. `None` means the working directory at lookup time.
	start: Option<PathBuf>,
	markers: Vec<String>,
}

impl MarkerRootFinder {
	/// Walk up from the process working directory with the default markers.
	pub fn new() -> Self {
		Self {
			start: None,
			markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
		}
	}

	/// Walk up from `start` instead of the working directory.
	pub fn starting_at(start: impl Into<PathBuf>) -> Self {
		Self {
			start: Some(start.into()),
			..Self::new()
		}
	}

	/// Replace the marker list.
	pub fn with_markers<I, S>(mut self, markers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.markers = markers.into_iter().map(Into::into).collect();
		self
	}

	pub fn markers(&self) -> &[String] {
		&self.markers
	}

	async fn has_marker(&self, dir: &Path) -> bool {
		for marker in &self.markers {
			if tokio::fs::try_exists(dir.join(marker))
				.await
				.unwrap_or(false)
			{
				return true;
			}
		}
		false
	}
}

impl Default for MarkerRootFinder {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl RootFinder for MarkerRootFinder {
	async fn find_root(&self) -> Result<PathBuf> {
		let start = match &self.start {
			Some(dir) => absolute(dir)?,
			None => {
				std::env::current_dir().map_err(|source| LocatorError::CurrentDir { source })?
			}
		};

		let mut current_dir = start.clone();

		// Walk up the directory tree
		loop {
			if self.has_marker(&current_dir).await {
				tracing::debug!(root = %current_dir.display(), "found project root");
				return Ok(current_dir);
			}

			// Move to parent directory
			if let Some(parent) = current_dir.parent() {
				current_dir = parent.to_path_buf();
			} else {
				break;
			}
		}

		Err(LocatorError::RootNotFound { start })
	}
}

/// Always returns the same root directory.
#[derive(Debug, Clone)]
pub struct FixedRoot {
	root: PathBuf,
}

impl FixedRoot {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}
}

#[async_trait]
impl RootFinder for FixedRoot {
	async fn find_root(&self) -> Result<PathBuf> {
		absolute(&self.root)
	}
}

fn absolute(path: &Path) -> Result<PathBuf> {
	std::path::absolute(path).map_err(|source| LocatorError::CurrentDir { source })
}
