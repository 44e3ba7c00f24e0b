//! Repository configuration.

/// Configuration shared by the repository core and the remote validator.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Base URL of the activation endpoint, trailing slash included.
    pub endpoint: String,
}

impl RepositoryConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.o2.sk/";

    pub fn new() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
