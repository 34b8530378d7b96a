//! Store client configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the favorites store and its identity
/// provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store service
    pub url: String,

    /// Bearer token for the signed-in identity, if any
    pub access_token: Option<String>,
}

impl StoreConfig {
    /// Configuration with no stored credentials.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Configuration with a previously stored token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}
