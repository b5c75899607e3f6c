use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;

/// Ensure the report directory exists and contains at least one file.
///
/// An absent directory is created (with parents). An empty directory is
/// seeded with `count` placeholder reports, each stamped with the current
/// local date. A directory that already has entries is left untouched.
///
/// Returns the number of placeholder files written (0 when reports were
/// already present).
pub fn seed_reports(dir: &Path, count: usize) -> Result<usize> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
        info!("Created report directory {}", dir.display());
    }

    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list report directory {}", dir.display()))?;
    if entries.next().is_some() {
        info!("Reports already present in {}", dir.display());
        return Ok(0);
    }

    info!("Seeding {} placeholder reports", count);
    let today = Local::now().date_naive();
    for index in 1..=count {
        let path = dir.join(format!("report_{}.txt", index));
        fs::write(&path, format!("Placeholder report #{} for {}", index, today))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(count)
}
