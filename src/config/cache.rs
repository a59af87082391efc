use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory cache of config lookups, keyed by config file name.
///
/// Holds two independent maps: decoded contents written by
/// [`read_config`](crate::config::ConfigResolver::read_config) and resolved
/// paths written by [`config_path`](crate::config::ConfigResolver::config_path).
/// Entries never expire; only [`clear`](ConfigCache::clear) removes them.
///
/// Concurrent misses for the same name are not deduplicated: each caller does
/// its own lookup and the last insert wins.
#[derive(Debug, Default)]
pub struct ConfigCache {
	contents: Mutex<HashMap<String, String>>,
	paths: Mutex<HashMap<String, PathBuf>>,
}

impl ConfigCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Cached contents for `name`, if a previous read stored them.
	pub fn content(&self, name: &str) -> Option<String> {
		lock(&self.contents).get(name).cloned()
	}

	pub fn insert_content(&self, name: &str, content: String) {
		lock(&self.contents).insert(name.to_string(), content);
	}

	/// Cached resolved path for `name`, if a previous path lookup stored one.
	pub fn path(&self, name: &str) -> Option<PathBuf> {
		lock(&self.paths).get(name).cloned()
	}

	pub fn insert_path(&self, name: &str, path: PathBuf) {
		lock(&self.paths).insert(name.to_string(), path);
	}

	/// Drop every cached content and path entry.
	pub fn clear(&self) {
		*lock(&self.contents) = HashMap::new();
		*lock(&self.paths) = HashMap::new();
	}

	/// Total number of entries across both maps.
	pub fn len(&self) -> usize {
		lock(&self.contents).len() + lock(&self.paths).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

// The maps only hold plain values, so a poisoned lock is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
