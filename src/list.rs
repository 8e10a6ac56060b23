use anyhow::Result;
use chrono::{DateTime, Local};
use colored::*;
use humansize::{DECIMAL, format_size};
use std::fs;
use walkdir::WalkDir;

use crate::{
    cli::Config,
    utils::{original_path, strip_entry_suffix},
};

const NAME_WIDTH: usize = 24;

/// Print one row per entry under the archive root, in traversal order.
pub fn list_command(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.archive_root)?;

    println!(
        "{}  {}  {}  {}",
        format!("{:>10}", "SIZE").bold(),
        format!("{:16}", "MODIFIED").bold(),
        format!("{:NAME_WIDTH$}", "NAME").bold(),
        "ORIGINAL PATH".bold(),
    );

    for entry in WalkDir::new(&config.archive_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let meta = entry.metadata()?;
        let modified: DateTime<Local> = meta.modified()?.into();
        let name = display_name(&entry.file_name().to_string_lossy());
        let original = original_path(&config.archive_root, entry.path());
        println!(
            "{:>10}  {}  {:NAME_WIDTH$}  {}",
            format_size(meta.len(), DECIMAL),
            modified.format("%Y-%m-%d %H:%M"),
            name,
            original.display().to_string().blue(),
        );
    }
    Ok(())
}

fn display_name(file_name: &str) -> String {
    let name = strip_entry_suffix(file_name);
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let truncated: String = name.chars().take(NAME_WIDTH - 1).collect();
    format!("{truncated}…")
}
