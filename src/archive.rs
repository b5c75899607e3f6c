use std::fs;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::constants::ARCHIVE_COMPRESSION_LEVEL;

/// Build a ZIP archive holding a full snapshot of the report directory.
///
/// Any archive already present at `dest` is removed first; there is no
/// incremental update. Every regular file under `source_dir` is stored
/// under its path relative to `source_dir`, preserving the directory
/// structure. Returns the number of entries written.
pub fn build_archive(source_dir: &Path, dest: &Path) -> Result<usize> {
    if !source_dir.is_dir() {
        bail!("Report directory {} does not exist", source_dir.display());
    }

    if dest.exists() {
        fs::remove_file(dest)
            .with_context(|| format!("Failed to remove stale archive {}", dest.display()))?;
        debug!("Removed stale archive {}", dest.display());
    }

    let zip_file = fs::File::create(dest)
        .with_context(|| format!("Failed to create archive {}", dest.display()))?;
    let mut zip = ZipWriter::new(zip_file);

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(ARCHIVE_COMPRESSION_LEVEL))
        .unix_permissions(0o644);

    let mut entries = 0usize;
    for entry in WalkDir::new(source_dir) {
        let entry =
            entry.with_context(|| format!("Failed to walk {}", source_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel_path = path
            .strip_prefix(source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        zip.start_file(rel_path.clone(), options)
            .with_context(|| format!("Failed to start archive entry for {}", rel_path))?;

        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let mut reader = BufReader::new(file);
        io::copy(&mut reader, &mut zip)
            .with_context(|| format!("Failed to write {} into archive", rel_path))?;

        debug!("Archived {}", rel_path);
        entries += 1;
    }

    zip.finish()
        .with_context(|| format!("Failed to finalize archive {}", dest.display()))?;

    info!("Archived {} files into {}", entries, dest.display());
    Ok(entries)
}
