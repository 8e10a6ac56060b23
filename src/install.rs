use anyhow::{Context, Result};
use std::{fs, os::unix::fs::PermissionsExt, path::Path, process::Command};
use which::which;

use crate::{cli::Config, error::Error};

const BIN_NAME: &str = env!("CARGO_PKG_NAME");
const DOWNLOAD_URL: &str = "https://github.com/icebox-cli/icebox/releases/latest/download/icebox";

/// Fetch the released binary and drop it at the configured install path.
pub fn install_command(config: &Config) -> Result<()> {
    let target = &config.install_path;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }

    download(DOWNLOAD_URL, target)?;

    if !target.is_file() {
        return Err(Error::InstallFailed(format!(
            "{} is missing after the download",
            target.display()
        ))
        .into());
    }
    let mut perms = fs::metadata(target)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(target, perms)?;

    eprintln!("installed {}", target.display());
    Ok(())
}

fn download(url: &str, to: &Path) -> Result<()> {
    if which("curl").is_ok() {
        let mut cmd = Command::new("curl");
        cmd.arg("-fsSL").arg(url).arg("-o").arg(to);
        return transfer(cmd, "curl");
    }
    if which("wget").is_ok() {
        let mut cmd = Command::new("wget");
        cmd.arg("-q").arg(url).arg("-O").arg(to);
        return transfer(cmd, "wget");
    }
    Err(Error::NoTransferTool.into())
}

fn transfer(mut cmd: Command, tool: &str) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to run {tool}"))?;
    if !status.success() {
        return Err(Error::TransferFailed(format!("{tool} exited with {status}")).into());
    }
    Ok(())
}

/// Remove the installed copy: the configured path first, then whatever the
/// PATH search turns up.
pub fn uninstall_command(config: &Config) -> Result<()> {
    if config.install_path.is_file() {
        fs::remove_file(&config.install_path)?;
        eprintln!("removed {}", config.install_path.display());
        return Ok(());
    }
    if let Ok(found) = which(BIN_NAME) {
        fs::remove_file(&found)?;
        eprintln!("removed {}", found.display());
        return Ok(());
    }
    Err(Error::UninstallTargetMissing.into())
}
