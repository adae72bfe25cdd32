//! Identity of whoever issued the current mutation.

use serde::{Deserialize, Serialize};

/// Identity recorded when no authenticated actor is attached to a request.
pub const SYSTEM_ACTOR: &str = "SYSTEM";

/// Authenticated identity for the current request, if any.
///
/// Resolution of the identity (tokens, sessions, API keys) happens in the
/// host; the engine only needs the resulting user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    user_id: Option<String>,
}

impl ActorContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Self::system();
        }
        Self {
            user_id: Some(user_id),
        }
    }

    /// A context without an authenticated user.
    pub fn system() -> Self {
        Self { user_id: None }
    }

    pub fn from_option(user_id: Option<String>) -> Self {
        user_id.map(Self::new).unwrap_or_default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The identity to stamp on audit records and approvals.
    pub fn id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(SYSTEM_ACTOR)
    }
}
