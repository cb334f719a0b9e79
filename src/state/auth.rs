//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell gates every view on `user`. The sign-in button drives the
//! `loading` flag and renders `error` as a dismissible message beneath itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use claims::{SignInError, SignedInUser};

/// Authentication state tracking the signed-in user and sign-in progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SignedInUser>,
    /// A sign-in attempt is waiting on the wallet.
    pub loading: bool,
    /// Message from the last failed attempt, until dismissed or retried.
    pub error: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Mark an attempt as started. Returns `false` if one is already running
    /// or a user is signed in, in which case the click must be ignored.
    pub fn begin_sign_in(&mut self) -> bool {
        if self.loading || self.user.is_some() {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply the outcome of an attempt. Always leaves `loading` cleared.
    pub fn finish_sign_in(&mut self, result: Result<SignedInUser, SignInError>) {
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
            }
            Err(e) => {
                self.user = None;
                self.error = Some(e.user_message());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop the session. Returns the user that was signed in, if any.
    pub fn sign_out(&mut self) -> Option<SignedInUser> {
        self.error = None;
        self.loading = false;
        self.user.take()
    }
}
