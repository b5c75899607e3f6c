use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::info;

use crate::archive::build_archive;
use crate::cloud::{BucketStatus, ObjectStore};
use crate::config::RunConfig;
use crate::reports::seed_reports;

/// What a completed run did, for logging and assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Placeholder reports written (0 when reports were already present)
    pub seeded: usize,
    /// Files stored in the archive
    pub archived: usize,
    /// Object key the archive was uploaded under, unless skipped
    pub uploaded_key: Option<String>,
}

/// Guarantee the bucket exists before the rest of the run.
///
/// An accessible bucket is a no-op. A missing bucket is created with a
/// single call. A bucket that rejects the caller's credentials is a fatal
/// error rather than a creation attempt.
pub async fn ensure_bucket(store: &dyn ObjectStore, bucket: &str) -> Result<()> {
    match store
        .bucket_status(bucket)
        .await
        .with_context(|| format!("Failed to check bucket '{}'", bucket))?
    {
        BucketStatus::Accessible => {
            info!("Bucket '{}' already exists", bucket);
            Ok(())
        }
        BucketStatus::Missing => {
            info!("Creating bucket '{}'...", bucket);
            store
                .create_bucket(bucket)
                .await
                .with_context(|| format!("Failed to create bucket '{}'", bucket))?;
            info!("Bucket '{}' created successfully", bucket);
            Ok(())
        }
        BucketStatus::AccessDenied => {
            bail!(
                "Bucket '{}' exists but is not accessible with the current credentials",
                bucket
            )
        }
    }
}

/// Upload the archive under its own filename as the object key.
pub async fn upload_archive(
    store: &dyn ObjectStore,
    bucket: &str,
    archive_path: &Path,
) -> Result<String> {
    let key = archive_path
        .file_name()
        .ok_or_else(|| {
            anyhow!(
                "Archive path {} has no filename component",
                archive_path.display()
            )
        })?
        .to_string_lossy()
        .to_string();

    let body = fs::read(archive_path)
        .with_context(|| format!("Failed to read archive {}", archive_path.display()))?;

    store
        .put_object(bucket, &key, body)
        .await
        .with_context(|| format!("Failed to upload '{}' to bucket '{}'", key, bucket))?;

    info!("Uploaded '{}' to bucket '{}'", key, bucket);
    Ok(key)
}

/// Run the full pipeline: ensure bucket, seed reports, archive, upload.
///
/// Stages run strictly in order; the first failure aborts the run.
pub async fn run(
    config: &RunConfig,
    store: &dyn ObjectStore,
    skip_upload: bool,
) -> Result<RunSummary> {
    ensure_bucket(store, &config.bucket).await?;

    let seeded = seed_reports(&config.reports_dir, config.report_count)?;
    let archived = build_archive(&config.reports_dir, &config.archive_path)?;

    let uploaded_key = if skip_upload {
        info!("Upload skipped");
        None
    } else {
        Some(upload_archive(store, &config.bucket, &config.archive_path).await?)
    };

    Ok(RunSummary {
        seeded,
        archived,
        uploaded_key,
    })
}
