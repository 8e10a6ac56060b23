use anyhow::Result;
use std::{fs, path::Path, process::Command};

use crate::{
    cli::Config,
    error::Error,
    utils::{compressor, original_path, run_checked},
};

/// Put one entry back where it came from, drop the entry, and clean up the
/// directories that only existed to hold it.
pub fn restore_command(config: &Config, entry: &Path) -> Result<()> {
    if !entry.is_file() {
        return Err(Error::EntryNotFound(entry.to_path_buf()).into());
    }

    let prog = compressor(config);
    let mut cmd = Command::new("tar");
    cmd.arg("-P")
        .arg("-x")
        .arg("--use-compress-program")
        .arg(&prog)
        .arg("-f")
        .arg(entry);
    run_checked(&mut cmd, "tar")?;

    fs::remove_file(entry)?;
    if let Some(parent) = entry.parent() {
        prune_upward(&config.archive_root, parent)?;
    }

    println!("restored {}", original_path(&config.archive_root, entry).display());
    Ok(())
}

/// Remove now-empty directories from `start` upward. Stops at the first
/// directory that still has contents, and never leaves the archive root or
/// touches the root itself.
fn prune_upward(root: &Path, start: &Path) -> Result<()> {
    let mut dir = start;
    while dir != root && dir.starts_with(root) {
        if fs::read_dir(dir)?.next().is_some() {
            break;
        }
        fs::remove_dir(dir)?;
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    Ok(())
}
