use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    cli::Config,
    utils::{ENTRY_SUFFIX, compressor, move_file, run_checked},
};

/// Archive one resolved source: compress it next to where it lives, and
/// only once that worked delete the original and move the artifact to the
/// mirror of its parent directory under the archive root.
pub fn archive_command(config: &Config, source: &Path) -> Result<()> {
    let name = source
        .file_name()
        .with_context(|| format!("{} has no file name", source.display()))?
        .to_string_lossy()
        .into_owned();
    let parent = source
        .parent()
        .with_context(|| format!("{} has no parent directory", source.display()))?;
    let artifact = parent.join(format!("{name}{ENTRY_SUFFIX}"));

    // -P keeps the absolute path in the payload, which is the whole trick:
    // restoring needs no record of where the entry came from
    let prog = compressor(config);
    let mut cmd = Command::new("tar");
    cmd.arg("-P")
        .arg("-c")
        .arg("--use-compress-program")
        .arg(&prog)
        .arg("-f")
        .arg(&artifact)
        .arg(source);
    if let Err(e) = run_checked(&mut cmd, "tar") {
        // the source stays; a half-written artifact does not
        let _ = fs::remove_file(&artifact);
        return Err(e);
    }

    if source.is_dir() {
        fs::remove_dir_all(source)?;
    } else {
        fs::remove_file(source)?;
    }

    let dest_dir = mirror_dir(&config.archive_root, parent);
    fs::create_dir_all(&dest_dir)?;
    let dest = dest_dir.join(format!("{name}{ENTRY_SUFFIX}"));
    move_file(&artifact, &dest)?;

    println!("archived {} -> {}", source.display(), dest.display());
    Ok(())
}

/// `/home/u` mirrored under root `R` is `R/home/u`.
fn mirror_dir(root: &Path, parent: &Path) -> PathBuf {
    root.join(parent.strip_prefix("/").unwrap_or(parent))
}
