use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use rusoto_core::{ByteStream, Region, RusotoError};
use rusoto_s3::{
    CreateBucketConfiguration, CreateBucketRequest, HeadBucketError, HeadBucketRequest,
    PutObjectRequest, S3Client, S3,
};

use crate::cloud::client::{create_s3_client, resolve_region};
use crate::cloud::{BucketStatus, ObjectStore};

/// Amazon S3 implementation of [`ObjectStore`].
///
/// Holds a shared client plus the resolved region, which is needed again
/// at bucket-creation time for the location constraint.
pub struct S3Store {
    client: Arc<S3Client>,
    region: Region,
}

impl S3Store {
    /// Create a store for the given region and optional credential profile
    pub fn new(region_name: Option<&str>, profile: Option<&str>) -> Result<Self> {
        let region = resolve_region(region_name);
        let client = create_s3_client(&region, profile)?;
        Ok(S3Store { client, region })
    }

    /// Get the AWS region this store talks to
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Location constraint for bucket creation; us-east-1 must omit it
    fn location_constraint(&self) -> Option<CreateBucketConfiguration> {
        match self.region {
            Region::UsEast1 => None,
            ref other => Some(CreateBucketConfiguration {
                location_constraint: Some(other.name().to_string()),
            }),
        }
    }
}

/// Map an HTTP status from a failed head-bucket call to a bucket status
fn bucket_status_from_http(code: u16) -> Result<BucketStatus> {
    match code {
        404 => Ok(BucketStatus::Missing),
        401 | 403 => Ok(BucketStatus::AccessDenied),
        code => Err(anyhow!(
            "Unexpected response {} from bucket status check",
            code
        )),
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn bucket_status(&self, bucket: &str) -> Result<BucketStatus> {
        let request = HeadBucketRequest {
            bucket: bucket.to_string(),
            ..Default::default()
        };

        match self.client.head_bucket(request).await {
            Ok(()) => Ok(BucketStatus::Accessible),
            Err(RusotoError::Service(HeadBucketError::NoSuchBucket(_))) => {
                Ok(BucketStatus::Missing)
            }
            // HEAD responses carry no body, so most failures surface as
            // raw HTTP responses rather than parsed service errors.
            Err(RusotoError::Unknown(response)) => {
                debug!(
                    "Head bucket '{}' returned HTTP {}",
                    bucket,
                    response.status.as_u16()
                );
                bucket_status_from_http(response.status.as_u16())
            }
            Err(e) => Err(anyhow::Error::from(e)),
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let request = CreateBucketRequest {
            bucket: bucket.to_string(),
            create_bucket_configuration: self.location_constraint(),
            ..Default::default()
        };

        self.client
            .create_bucket(request)
            .await
            .with_context(|| format!("Failed to create bucket '{}'", bucket))?;

        info!("Created bucket '{}' in region {}", bucket, self.region.name());
        Ok(())
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let size = body.len();
        let request = PutObjectRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: Some(ByteStream::from(body)),
            ..Default::default()
        };

        self.client
            .put_object(request)
            .await
            .with_context(|| format!("Failed to upload to s3://{}/{}", bucket, key))?;

        debug!("Stored {} bytes at s3://{}/{}", size, bucket, key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new_with_region() {
        let store = S3Store::new(Some("us-west-2"), None).unwrap();
        assert_eq!(store.region().name(), "us-west-2");
    }

    #[test]
    fn test_store_new_with_invalid_region() {
        let store = S3Store::new(Some("invalid-region"), None).unwrap();
        // Should fall back to the default region
        assert_eq!(store.region().name(), Region::default().name());
    }

    #[test]
    fn test_location_constraint_us_east_1() {
        let store = S3Store::new(Some("us-east-1"), None).unwrap();
        assert!(store.location_constraint().is_none());
    }

    #[test]
    fn test_location_constraint_other_region() {
        let store = S3Store::new(Some("eu-west-1"), None).unwrap();
        let config = store.location_constraint().unwrap();
        assert_eq!(config.location_constraint, Some("eu-west-1".to_string()));
    }

    #[test]
    fn test_bucket_status_from_http_not_found() {
        assert_eq!(
            bucket_status_from_http(404).unwrap(),
            BucketStatus::Missing
        );
    }

    #[test]
    fn test_bucket_status_from_http_denied() {
        assert_eq!(
            bucket_status_from_http(403).unwrap(),
            BucketStatus::AccessDenied
        );
        assert_eq!(
            bucket_status_from_http(401).unwrap(),
            BucketStatus::AccessDenied
        );
    }

    #[test]
    fn test_bucket_status_from_http_other_is_an_error() {
        let result = bucket_status_from_http(500);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unexpected response 500"));
    }
}
