use std::sync::Arc;

use anyhow::Result;
use log::warn;
use rusoto_core::Region;
use rusoto_s3::S3Client;

/// Resolve an optional region name, falling back to the SDK default
pub fn resolve_region(region_name: Option<&str>) -> Region {
    match region_name {
        Some(name) => match name.parse::<Region>() {
            Ok(r) => r,
            Err(_) => {
                warn!("Invalid region '{}', using default", name);
                Region::default()
            }
        },
        None => Region::default(),
    }
}

/// Create an S3 client for the given region and optional credential profile
pub fn create_s3_client(region: &Region, profile: Option<&str>) -> Result<Arc<S3Client>> {
    let s3_client = if let Some(profile_name) = profile {
        match rusoto_credential::ProfileProvider::new() {
            Ok(mut provider) => {
                provider.set_profile(profile_name);
                match rusoto_core::HttpClient::new() {
                    Ok(http_client) => Arc::new(S3Client::new_with(
                        http_client,
                        provider,
                        region.clone(),
                    )),
                    Err(e) => {
                        warn!("Failed to create HTTP client: {}, using default", e);
                        Arc::new(S3Client::new(region.clone()))
                    }
                }
            }
            Err(e) => {
                warn!("Failed to create AWS profile provider: {}, using default", e);
                Arc::new(S3Client::new(region.clone()))
            }
        }
    } else {
        Arc::new(S3Client::new(region.clone()))
    };

    Ok(s3_client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_region_named() {
        let region = resolve_region(Some("eu-central-1"));
        assert_eq!(region.name(), "eu-central-1");
    }

    #[test]
    fn test_resolve_region_invalid_falls_back() {
        let region = resolve_region(Some("not-a-region"));
        assert_eq!(region.name(), Region::default().name());
    }

    #[test]
    fn test_resolve_region_none() {
        let region = resolve_region(None);
        assert_eq!(region.name(), Region::default().name());
    }
}
