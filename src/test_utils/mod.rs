//! Test utilities shared across unit test modules.

#![cfg(test)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a report directory with a nested structure:
///
/// ```text
/// report_1.txt
/// report_2.txt
/// metrics/daily.csv
/// metrics/regional/emea.csv
/// ```
pub fn create_report_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path();

    fs::create_dir_all(base.join("metrics/regional"))?;
    fs::write(base.join("report_1.txt"), b"sales were up")?;
    fs::write(base.join("report_2.txt"), b"sales were down")?;
    fs::write(base.join("metrics/daily.csv"), b"day,total\nmon,10\n")?;
    fs::write(base.join("metrics/regional/emea.csv"), b"region,total\nemea,4\n")?;

    Ok(temp_dir)
}

/// Lists the entry names of a ZIP archive on disk
pub fn archive_entry_names(path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(path)?;
    let mut archive = zip::read::ZipArchive::new(file)?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i)?.name().to_string());
    }
    Ok(names)
}
