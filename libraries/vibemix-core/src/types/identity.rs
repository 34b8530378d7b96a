/// Authenticated identity
use crate::types::OwnerId;
use serde::{Deserialize, Serialize};

/// The currently signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned user id; owns all favorites documents
    pub user_id: OwnerId,

    /// Sign-in email, kept for display
    pub email: String,
}

impl Identity {
    /// Create a new identity
    pub fn new(user_id: OwnerId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
