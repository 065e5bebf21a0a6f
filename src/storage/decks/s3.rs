//! S3-compatible deck storage
//!
//! Works against AWS S3 or any S3-compatible store exposing a custom
//! endpoint (e.g. Cloudflare R2, where the original deck bucket lived).

use crate::config::S3Config;
use crate::utils::error::Result;
use tracing::info;
#[cfg(feature = "s3")]
use crate::utils::error::HubError;
#[cfg(feature = "s3")]
use chrono::{DateTime, Utc};
#[cfg(feature = "s3")]
use tracing::debug;

use super::types::DeckObject;

/// S3 deck storage
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct S3Decks {
    bucket: String,
    region: String,
    #[cfg(feature = "s3")]
    client: Option<aws_sdk_s3::Client>,
    #[cfg(not(feature = "s3"))]
    client: Option<()>, // Placeholder when the s3 feature is disabled
}

impl S3Decks {
    /// Create a new S3 deck store instance
    #[allow(unused_variables)]
    pub async fn new(config: &S3Config) -> Result<Self> {
        info!(
            "S3 deck store initialized: bucket={}, region={}",
            config.bucket, config.region
        );

        #[cfg(feature = "s3")]
        {
            use aws_sdk_s3::config::Region;

            let region = Region::new(config.region.clone());
            let mut loader =
                aws_config::defaults(aws_config::BehaviorVersion::latest()).region(region);
            if let Some(endpoint) = &config.endpoint {
                loader = loader.endpoint_url(endpoint);
            }
            let aws_config = loader.load().await;

            let client = aws_sdk_s3::Client::new(&aws_config);

            Ok(Self {
                bucket: config.bucket.clone(),
                region: config.region.clone(),
                client: Some(client),
            })
        }

        #[cfg(not(feature = "s3"))]
        {
            Ok(Self {
                bucket: config.bucket.clone(),
                region: config.region.clone(),
                client: None,
            })
        }
    }

    /// List all decks in the bucket
    pub async fn list(&self) -> Result<Vec<DeckObject>> {
        #[cfg(feature = "s3")]
        {
            if let Some(client) = &self.client {
                let listed = client
                    .list_objects_v2()
                    .bucket(&self.bucket)
                    .send()
                    .await
                    .map_err(|e| HubError::DeckStorage(format!("S3 list failed: {}", e)))?;

                let decks = listed
                    .contents()
                    .iter()
                    .map(|object| DeckObject {
                        name: object.key().unwrap_or_default().to_string(),
                        size: object.size().unwrap_or(0).max(0) as u64,
                        uploaded: object
                            .last_modified()
                            .and_then(|t| DateTime::<Utc>::from_timestamp_millis(t.to_millis().ok()?)),
                    })
                    .collect();

                Ok(decks)
            } else {
                Err(HubError::DeckStorage("S3 client not initialized".to_string()))
            }
        }

        #[cfg(not(feature = "s3"))]
        {
            Err(crate::utils::error::HubError::DeckStorage(
                "S3 feature not enabled".to_string(),
            ))
        }
    }

    /// Retrieve a deck's bytes; `None` when the object is absent
    #[allow(unused_variables)]
    pub async fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        #[cfg(feature = "s3")]
        {
            if let Some(client) = &self.client {
                let result = client
                    .get_object()
                    .bucket(&self.bucket)
                    .key(name)
                    .send()
                    .await;

                match result {
                    Ok(object) => {
                        let bytes = object.body.collect().await.map_err(|e| {
                            HubError::DeckStorage(format!("Failed to read S3 content: {}", e))
                        })?;
                        debug!("Deck downloaded from S3: {}", name);
                        Ok(Some(bytes.to_vec()))
                    }
                    Err(err) => {
                        let service_err = err.into_service_error();
                        if service_err.is_no_such_key() {
                            Ok(None)
                        } else {
                            Err(HubError::DeckStorage(format!(
                                "S3 download failed: {}",
                                service_err
                            )))
                        }
                    }
                }
            } else {
                Err(HubError::DeckStorage("S3 client not initialized".to_string()))
            }
        }

        #[cfg(not(feature = "s3"))]
        {
            Err(crate::utils::error::HubError::DeckStorage(
                "S3 feature not enabled".to_string(),
            ))
        }
    }
}
