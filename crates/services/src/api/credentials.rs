use std::sync::{Arc, PoisonError, RwLock};

use learn_core::model::AuthToken;

/// Token shared between the auth flow (writer) and the HTTP client (reader).
#[derive(Clone, Default)]
pub struct Credentials {
    token: Arc<RwLock<Option<AuthToken>>>,
}

impl Credentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: Option<AuthToken>) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }

    pub fn clear(&self) {
        self.set(None);
    }

    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}
