//! Registry of contact form submissions currently in flight.
//!
//! A token is registered for the duration of one outbound call. A second
//! attempt carrying the same token while the first is outstanding gets no
//! permit and must not call the endpoint.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::types::FormToken;

#[derive(Clone, Debug, Default)]
pub struct InFlightSubmissions {
    tokens: Arc<Mutex<HashSet<FormToken>>>,
}

impl InFlightSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<FormToken>> {
        // The set holds no invariant a panicking holder could break.
        self.tokens.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers `token`, or returns `None` when it is already in flight.
    pub fn try_begin(&self, token: FormToken) -> Option<SubmissionPermit> {
        if self.lock().insert(token) {
            Some(SubmissionPermit {
                registry: self.clone(),
                token,
            })
        } else {
            None
        }
    }

    pub fn is_in_flight(&self, token: &FormToken) -> bool {
        self.lock().contains(token)
    }
}

/// Proof that a submission is in flight; dropping it releases the token.
#[derive(Debug)]
pub struct SubmissionPermit {
    registry: InFlightSubmissions,
    token: FormToken,
}

impl SubmissionPermit {
    pub fn token(&self) -> FormToken {
        self.token
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.token);
    }
}
