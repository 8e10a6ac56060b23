use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::{archiver, error::Error, install, list, resolve, restore};

const DEFAULT_ROOT_NAME: &str = ".icebox";
const DEFAULT_INSTALL_PATH: &str = "/usr/local/bin/icebox";

#[derive(Parser, Debug)]
#[command(version, about = "Move files into a compressed archive and bring them back later.")]
pub struct Cli {
    #[arg(short, long, help = "Restore targets from the archive instead of archiving them")]
    undo: bool,

    #[arg(short, long, help = "List everything in the archive")]
    list: bool,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Use this archive directory (must exist) instead of the default"
    )]
    archive_dir: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "PROG",
        help = "Compression program to pipe tar through (default: pigz if available, else gzip)"
    )]
    compress: Option<String>,

    #[arg(short, long, help = "Download the latest release and install it")]
    install: bool,

    #[arg(long, value_name = "PATH", help = "Where --install and --uninstall look for the binary")]
    install_path: Option<PathBuf>,

    #[arg(long, help = "Remove an installed copy")]
    uninstall: bool,

    #[arg(help = "Files to archive, or entries to restore with --undo")]
    targets: Vec<String>,
}

/// Everything the subcommand-less modes need, resolved once from the
/// parsed flags and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub archive_root: PathBuf,
    pub install_path: PathBuf,
    pub compress: Option<String>,
    pub undo: bool,
}

impl Config {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let archive_root = match &cli.archive_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(Error::InvalidArchiveDir(dir.clone()).into());
                }
                dir.canonicalize()?
            }
            None => default_root()?,
        };
        let install_path = cli
            .install_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_PATH));
        Ok(Config {
            archive_root,
            install_path,
            compress: cli.compress.clone(),
            undo: cli.undo,
        })
    }
}

fn default_root() -> Result<PathBuf> {
    let root = dirs::home_dir()
        .context("home directory not found")?
        .join(DEFAULT_ROOT_NAME);
    // one canonical spelling, so prefix checks against it are reliable
    if root.exists() {
        Ok(root.canonicalize()?)
    } else {
        Ok(root)
    }
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_cli(self)?;

        // terminal actions, dispatched only after the whole command line
        // is parsed so a later --install-path still counts
        if self.install {
            return install::install_command(&config);
        }
        if self.uninstall {
            return install::uninstall_command(&config);
        }
        if self.list {
            return list::list_command(&config);
        }
        if self.targets.is_empty() {
            Cli::command().print_help()?;
            return Ok(());
        }

        for target in &self.targets {
            if config.undo {
                let entry = resolve::resolve_entry(&config, target)?;
                restore::restore_command(&config, &entry)?;
            } else {
                let source = resolve::resolve_source(&config, target)?;
                archiver::archive_command(&config, &source)?;
            }
        }
        Ok(())
    }
}
