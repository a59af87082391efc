use crate::config::cache::ConfigCache;
use crate::config::search::find_config_file;
use crate::config::types::LookupOptions;
use crate::error::{LocatorError, Result};
use crate::root::{MarkerRootFinder, RootFinder};
use std::path::PathBuf;
use std::sync::Arc;

/// Resolves config files under the project root and memoizes the results.
///
/// Each lookup that misses the cache asks the root finder for the project
/// root, probes the four candidate paths in priority order and takes the first
/// regular file. A missing config file is `Ok(None)`; misses are never cached.
///
/// The cache key is the config file name alone. Two lookups for the same name
/// with different `src_dir_name` values share one entry, so the second returns
/// whatever the first one cached.
#[derive(Debug)]
pub struct ConfigResolver<F = MarkerRootFinder> {
	root_finder: F,
	cache: Arc<ConfigCache>,
}

impl ConfigResolver<MarkerRootFinder> {
	/// Resolver rooted at the nearest marker above the working directory.
	pub fn from_current_dir() -> Self {
		Self::new(MarkerRootFinder::new())
	}
}

impl<F: RootFinder> ConfigResolver<F> {
	/// Create a resolver with its own empty cache.
	pub fn new(root_finder: F) -> Self {
		Self::with_cache(root_finder, Arc::new(ConfigCache::new()))
	}

	/// Create a resolver that shares `cache` with other resolvers.
	pub fn with_cache(root_finder: F, cache: Arc<ConfigCache>) -> Self {
		Self { root_finder, cache }
	}

	pub fn cache(&self) -> &Arc<ConfigCache> {
		&self.cache
	}

	pub fn root_finder(&self) -> &F {
		&self.root_finder
	}

	/// Find `name` and return its contents decoded with `options.encoding`.
	///
	/// With `options.cache` set, a cached value is returned without touching
	/// the filesystem, and a successful read is stored.
	pub async fn read_config(
		&self,
		name: &str,
		options: &LookupOptions,
	) -> Result<Option<String>> {
		if options.cache
			&& let Some(content) = self.cache.content(name)
		{
			tracing::debug!(name, "config contents served from cache");
			return Ok(Some(content));
		}

		let Some(path) = self.locate(name, options).await? else {
			return Ok(None);
		};

		let bytes = tokio::fs::read(&path)
			.await
			.map_err(|source| LocatorError::Read {
				path: path.clone(),
				source,
			})?;
		let content = options.encoding.decode(&bytes);

		if options.cache {
			self.cache.insert_content(name, content.clone());
		}

		Ok(Some(content))
	}

	/// Find `name` and return its absolute path without reading it.
	///
	/// Uses the path cache, which is separate from the contents cache.
	pub async fn config_path(
		&self,
		name: &str,
		options: &LookupOptions,
	) -> Result<Option<PathBuf>> {
		if options.cache
			&& let Some(path) = self.cache.path(name)
		{
			tracing::debug!(name, "config path served from cache");
			return Ok(Some(path));
		}

		let Some(path) = self.locate(name, options).await? else {
			return Ok(None);
		};

		if options.cache {
			self.cache.insert_path(name, path.clone());
		}

		Ok(Some(path))
	}

	/// Drop every cached content and path entry.
	pub fn clear_cache(&self) {
		self.cache.clear();
	}

	async fn locate(&self, name: &str, options: &LookupOptions) -> Result<Option<PathBuf>> {
		let root = self.root_finder.find_root().await?;
		let found = find_config_file(&root, name, &options.src_dir_name).await?;

		match &found {
			Some(path) => tracing::debug!(name, path = %path.display(), "resolved config file"),
			None => tracing::debug!(name, root = %root.display(), "no config file found"),
		}

		Ok(found)
	}
}
