//! # report-uploader
//!
//! A one-shot batch job that archives a local folder of daily reports and
//! uploads the archive to an S3 bucket. Intended to run on a schedule
//! (cron or similar), not as a long-running service.
//!
//! ## Pipeline
//!
//! Four strictly sequential stages:
//!
//! 1. **Ensure bucket**: create the target bucket if it does not exist
//! 2. **Seed reports**: create the report directory and placeholder files
//!    if it is empty
//! 3. **Archive**: rebuild a ZIP snapshot of the report directory
//! 4. **Upload**: store the archive in the bucket under its own filename
//!
//! ## Usage
//!
//! ```no_run
//! use report_uploader::cloud::s3::S3Store;
//! use report_uploader::config::RunConfig;
//! use report_uploader::pipeline;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RunConfig::default();
//! let store = S3Store::new(config.region.as_deref(), config.profile.as_deref())?;
//!
//! let summary = pipeline::run(&config, &store, false).await?;
//! println!("Uploaded {:?}", summary.uploaded_key);
//! # Ok(())
//! # }
//! ```
//!
//! The orchestration runs against the [`cloud::ObjectStore`] trait, so
//! tests substitute an in-memory store for the S3 client.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Object storage integration (S3 plus the capability trait)
pub mod cloud;

/// Run configuration loading and defaults
pub mod config;

/// Application constants and default values
pub mod constants;

/// ZIP archive construction
pub mod archive;

/// The four-stage run orchestration
pub mod pipeline;

/// Report directory seeding
pub mod reports;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
