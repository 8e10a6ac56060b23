use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    cli::Config,
    error::Error,
    utils::{ENTRY_SUFFIX, strip_entry_suffix},
};

/// Resolve an archive-mode target: it must exist and must not already live
/// under the archive root.
pub fn resolve_source(config: &Config, target: &str) -> Result<PathBuf> {
    let path = Path::new(target);
    if !path.exists() {
        return Err(Error::InvalidFile(path.to_path_buf()).into());
    }
    let resolved = path.canonicalize()?;
    if resolved.starts_with(&config.archive_root) {
        return Err(Error::InsideArchive(resolved).into());
    }
    Ok(resolved)
}

/// Resolve an undo-mode target. A bare name is searched for across the
/// whole root; that only works when it is unambiguous. Anything else is
/// taken as a path fragment under the root, with or without the entry
/// suffix, so clashing basenames can be told apart by their original path.
pub fn resolve_entry(config: &Config, target: &str) -> Result<PathBuf> {
    let mut matches = entries_named(&config.archive_root, target);
    if matches.len() == 1 {
        if let Some(only) = matches.pop() {
            return Ok(only);
        }
    }

    // joining an absolute path would replace the root, not prepend it
    let rel = target.trim_start_matches('/');
    let fragment = config.archive_root.join(rel);
    if fragment.exists() {
        return Ok(fragment);
    }
    let with_suffix = config.archive_root.join(format!("{rel}{ENTRY_SUFFIX}"));
    if with_suffix.exists() {
        return Ok(with_suffix);
    }

    Err(Error::InvalidFile(PathBuf::from(target)).into())
}

fn entries_named(root: &Path, name: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let file_name = e.file_name().to_string_lossy();
            file_name == name || strip_entry_suffix(&file_name) == name
        })
        .map(|e| e.into_path())
        .collect()
}
