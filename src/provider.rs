use crate::loader::LoadError;
use crate::location::ResourceLocation;
use async_trait::async_trait;
use serde_json::Value;

/// Source of JSON documents addressed by `ResourceLocation`.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    async fn fetch(&self, location: &ResourceLocation) -> Result<Value, LoadError>;
}

/// HTTP-backed provider. A transport failure or non-success status maps to
/// `LoadError::Unavailable`; a body that is not JSON maps to
/// `LoadError::Malformed`.
pub struct HttpProvider {
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceProvider for HttpProvider {
    async fn fetch(&self, location: &ResourceLocation) -> Result<Value, LoadError> {
        let url = location.to_string();
        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|error| LoadError::Unavailable {
                    location: url.clone(),
                    reason: error.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Unavailable {
                location: url,
                reason: format!("status {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| LoadError::Unavailable {
                location: url.clone(),
                reason: error.to_string(),
            })?;
        tracing::debug!(location = %url, bytes = body.len(), "fetched resource body");

        serde_json::from_str(&body).map_err(|source| LoadError::Malformed {
            location: url,
            source,
        })
    }
}

/// Filesystem-backed provider for local JSON fixtures.
pub struct FileProvider;

#[async_trait]
impl ResourceProvider for FileProvider {
    async fn fetch(&self, location: &ResourceLocation) -> Result<Value, LoadError> {
        let ResourceLocation::File(path) = location else {
            return Err(LoadError::Unavailable {
                location: location.to_string(),
                reason: "file provider cannot fetch remote locations".to_string(),
            });
        };

        let body =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|error| LoadError::Unavailable {
                    location: location.to_string(),
                    reason: error.to_string(),
                })?;
        tracing::debug!(location = %location, bytes = body.len(), "read resource file");

        serde_json::from_str(&body).map_err(|source| LoadError::Malformed {
            location: location.to_string(),
            source,
        })
    }
}

/// Dispatches per location kind: URLs go through HTTP, everything else is
/// read from disk.
pub struct DefaultProvider {
    http: HttpProvider,
    file: FileProvider,
}

impl DefaultProvider {
    pub fn new() -> Self {
        Self {
            http: HttpProvider::new(),
            file: FileProvider,
        }
    }
}

impl Default for DefaultProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceProvider for DefaultProvider {
    async fn fetch(&self, location: &ResourceLocation) -> Result<Value, LoadError> {
        if location.is_remote() {
            self.http.fetch(location).await
        } else {
            self.file.fetch(location).await
        }
    }
}
