use crate::config::types::{CONFIG_DIR_NAME, Candidate, ProbeOutcome};
use crate::error::{LocatorError, Result};
use std::path::{Component, Path, PathBuf};

/// Build the four candidate paths for `name` under `root`.
///
/// The order is the search priority:
/// 1. `root/name`
/// 2. `root/src_dir_name/name`
/// 3. `root/config/name`
/// 4. `root/src_dir_name/config/name`
///
/// A leading `/` (or drive prefix) on `name` or `src_dir_name` is dropped, so
/// every candidate starts with `root`. Paths are not normalized: `.` and `..`
/// segments are kept as written.
pub fn candidate_paths(root: &Path, name: &str, src_dir_name: &str) -> [PathBuf; 4] {
	let name = under_root(name);
	let src_dir = under_root(src_dir_name);

	[
		root.join(&name),
		root.join(&src_dir).join(&name),
		root.join(CONFIG_DIR_NAME).join(&name),
		root.join(&src_dir).join(CONFIG_DIR_NAME).join(&name),
	]
}

// `Path::join` replaces the base when given an absolute path.
fn under_root(segment: &str) -> PathBuf {
	Path::new(segment)
		.components()
		.filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
		.collect()
}

/// Find the first candidate that is a regular file.
///
/// Returns `Ok(None)` when no candidate matches. Directories and other
/// non-file entries are skipped.
pub async fn find_config_file(
	root: &Path,
	name: &str,
	src_dir_name: &str,
) -> Result<Option<PathBuf>> {
	for path in candidate_paths(root, name, src_dir_name) {
		let outcome = probe(&path).await?;
		tracing::trace!(path = %path.display(), ?outcome, "probed config candidate");

		if outcome == ProbeOutcome::File {
			return Ok(Some(path));
		}
	}

	Ok(None)
}

/// Probe every candidate without stopping at the first match.
pub async fn probe_candidates(
	root: &Path,
	name: &str,
	src_dir_name: &str,
) -> Result<Vec<Candidate>> {
	let mut candidates = Vec::with_capacity(4);

	for path in candidate_paths(root, name, src_dir_name) {
		let outcome = probe(&path).await?;
		candidates.push(Candidate { path, outcome });
	}

	Ok(candidates)
}

/// Existence check followed by a file-type check.
///
/// Errors from the existence check count as "missing"; a failing stat on a
/// path that exists is propagated.
async fn probe(path: &Path) -> Result<ProbeOutcome> {
	if !tokio::fs::try_exists(path).await.unwrap_or(false) {
		return Ok(ProbeOutcome::Missing);
	}

	let metadata = tokio::fs::metadata(path)
		.await
		.map_err(|source| LocatorError::Stat {
			path: path.to_path_buf(),
			source,
		})?;

	if metadata.is_file() {
		Ok(ProbeOutcome::File)
	} else {
		Ok(ProbeOutcome::NotFile)
	}
}
