//! Object storage integration for the report archive.
//!
//! The orchestration logic runs against the [`ObjectStore`] trait rather
//! than a concrete SDK client, so the pipeline can be tested against an
//! in-memory fake. The production implementation is [`s3::S3Store`],
//! backed by Amazon S3.

use anyhow::Result;
use async_trait::async_trait;

/// HTTP client construction for S3
pub mod client;

/// Amazon S3 implementation of the storage capability
pub mod s3;

/// Outcome of a bucket accessibility check.
///
/// A failed check is not conflated with absence: a bucket that exists but
/// rejects the caller's credentials is reported as `AccessDenied` so the
/// run can fail loudly instead of attempting a doomed create call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    /// The bucket exists and is accessible with the current credentials
    Accessible,
    /// No bucket with this name exists
    Missing,
    /// The bucket exists but the current credentials cannot use it
    AccessDenied,
}

/// Minimal storage capability the pipeline needs: check a bucket, create
/// a bucket, store one object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Check whether `bucket` exists and is accessible
    async fn bucket_status(&self, bucket: &str) -> Result<BucketStatus>;

    /// Create `bucket` in the backend
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Store `body` in `bucket` under `key`, replacing any existing object
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}
