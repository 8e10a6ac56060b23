use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use which::which;

use crate::cli::Config;

/// Every entry under the archive root carries this suffix.
pub const ENTRY_SUFFIX: &str = ".tar.gz";

/// Pick the program tar pipes through: the configured override, else pigz
/// when it is on the PATH, else gzip. tar invokes the same program with -d
/// on extraction, so the override has to speak the gzip convention.
pub fn compressor(config: &Config) -> String {
    if let Some(prog) = &config.compress {
        return prog.clone();
    }
    if which("pigz").is_ok() {
        return "pigz".to_string();
    }
    "gzip".to_string()
}

/// Run a prepared command and treat any non-zero exit as an error.
pub fn run_checked(cmd: &mut Command, what: &str) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to run {what}"))?;
    if !status.success() {
        return Err(anyhow!("{what} exited with {status}"));
    }
    Ok(())
}

/// Rename, falling back to copy + delete when the archive root sits on a
/// different filesystem than the source.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)
        .with_context(|| format!("could not move {} to {}", from.display(), to.display()))?;
    fs::remove_file(from)?;
    Ok(())
}

pub fn strip_entry_suffix(name: &str) -> &str {
    name.strip_suffix(ENTRY_SUFFIX).unwrap_or(name)
}

/// Recover the original absolute path from an entry's location: strip the
/// archive root prefix and the entry suffix, put the leading slash back.
pub fn original_path(root: &Path, entry: &Path) -> PathBuf {
    let rel = entry.strip_prefix(root).unwrap_or(entry).to_string_lossy();
    PathBuf::from(format!("/{}", strip_entry_suffix(&rel)))
}
