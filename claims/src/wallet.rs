//! Wallet sign-in: provider boundary, session flow, and error taxonomy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser injects an EIP-1193 style provider. The app crate wraps it in a
//! [`ProviderResolver`] and hands that to [`WalletSession`] at startup; tests
//! hand in a fake. The session never looks a provider up on its own.
//!
//! ERROR HANDLING
//! ==============
//! Providers report failures as a numeric `code` plus free text. That shape is
//! classified exactly once, in [`ProviderError::from_rpc`], and the session
//! maps the result onto the closed [`SignInError`] set the UI matches on.
//! Every failure leaves no partial session behind.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use std::cell::Cell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;

/// EIP-1193 "user rejected request".
pub const USER_REJECTED_CODE: i64 = 4001;
/// Wallet already has a request of this kind waiting for the user.
pub const REQUEST_PENDING_CODE: i64 = -32002;

// =============================================================================
// PROVIDER BOUNDARY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("user rejected the request")]
    UserRejected,
    #[error("a request is already pending in the wallet")]
    RequestPending,
    #[error("provider error (code {code:?}): {message}")]
    Rpc { code: Option<i64>, message: String },
}

impl ProviderError {
    /// Classify a raw provider failure by its code.
    pub fn from_rpc(code: Option<i64>, message: impl Into<String>) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => Self::UserRejected,
            Some(REQUEST_PENDING_CODE) => Self::RequestPending,
            _ => Self::Rpc { code, message: message.into() },
        }
    }
}

/// An injected wallet able to enumerate accounts and sign messages.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Ask the user to expose one or more accounts.
    async fn request_addresses(&self) -> Result<Vec<String>, ProviderError>;

    /// Pre-EIP-1102 account request, tried when the modern call fails.
    async fn legacy_request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Sign a human-readable message with `account`, returning the signature hex.
    async fn sign_message(&self, account: &Address, message: &str) -> Result<String, ProviderError>;
}

/// `personal_sign` payload: the UTF-8 message as `0x`-prefixed hex.
#[must_use]
pub fn personal_sign_payload(message: &str) -> String {
    format!("0x{}", hex::encode(message.as_bytes()))
}

/// Locates the wallet provider, if one is installed.
pub trait ProviderResolver {
    type Provider: WalletProvider;

    fn resolve(&self) -> Option<Self::Provider>;
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("no wallet provider detected")]
    ProviderUnavailable,
    #[error("user rejected the sign-in request")]
    UserRejected,
    #[error("a sign-in request is already pending")]
    RequestAlreadyPending,
    #[error("wallet returned no accounts")]
    NoAccountSelected,
    #[error("wallet returned an invalid address: {0}")]
    InvalidAddress(String),
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error("address request failed: {0}")]
    ProviderFailure(String),
}

impl SignInError {
    /// Message shown beneath the sign-in button.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ProviderUnavailable => "Wallet extension not detected. Please install it first.".to_owned(),
            Self::UserRejected => "You rejected the sign-in request.".to_owned(),
            Self::RequestAlreadyPending => "A sign-in request is already pending. Check your wallet.".to_owned(),
            Self::NoAccountSelected => "No account selected.".to_owned(),
            Self::InvalidAddress(_) => "Wallet returned an invalid address.".to_owned(),
            Self::SigningFailed(detail) => format!("Signing failed: {detail}"),
            Self::ProviderFailure(detail) => format!("Sign in failed: {detail}"),
        }
    }

    fn from_address_request(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected => Self::UserRejected,
            ProviderError::RequestPending => Self::RequestAlreadyPending,
            ProviderError::Rpc { message, .. } => Self::ProviderFailure(message),
        }
    }

    fn from_signing(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected => Self::UserRejected,
            ProviderError::RequestPending => Self::RequestAlreadyPending,
            ProviderError::Rpc { message, .. } => Self::SigningFailed(message),
        }
    }
}

/// The identity established by a successful sign-in. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    pub address: Address,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Runs the sign-in handshake against whatever provider the resolver finds.
pub struct WalletSession<R, C = SystemClock> {
    resolver: R,
    clock: C,
    config: AppConfig,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag on every exit path, including a dropped future.
struct InFlightGuard<'a>(&'a Cell<bool>);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) { None } else { Some(Self(flag)) }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<R: ProviderResolver> WalletSession<R> {
    pub fn new(resolver: R, config: AppConfig) -> Self {
        Self::with_clock(resolver, SystemClock, config)
    }
}

impl<R: ProviderResolver, C: Clock> WalletSession<R, C> {
    pub fn with_clock(resolver: R, clock: C, config: AppConfig) -> Self {
        Self { resolver, clock, config, in_flight: Cell::new(false) }
    }

    #[must_use]
    pub fn is_signing_in(&self) -> bool {
        self.in_flight.get()
    }

    /// Connect, pick the first account, and prove key control by signing.
    ///
    /// # Errors
    ///
    /// Returns a [`SignInError`] describing the first step that failed. A call
    /// made while another is outstanding fails with
    /// [`SignInError::RequestAlreadyPending`] without contacting the provider.
    pub async fn sign_in(&self) -> Result<SignedInUser, SignInError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            log::warn!("sign-in ignored: another attempt is in flight");
            return Err(SignInError::RequestAlreadyPending);
        };

        let result = self.handshake().await;
        match &result {
            Ok(user) => log::info!("signed in address={}", user.address),
            Err(e) => log::warn!("sign-in failed: {e}"),
        }
        result
    }

    async fn handshake(&self) -> Result<SignedInUser, SignInError> {
        let provider = self.resolver.resolve().ok_or(SignInError::ProviderUnavailable)?;

        let addresses = request_addresses(&provider).await?;
        let first = addresses.into_iter().next().ok_or(SignInError::NoAccountSelected)?;
        let account = Address::parse(&first).map_err(|e| SignInError::InvalidAddress(e.to_string()))?;

        let now_ms = self.clock.now_ms();
        let message = self.config.sign_in_message(now_ms);
        let signature = provider
            .sign_message(&account, &message)
            .await
            .map_err(SignInError::from_signing)?;
        log::debug!("sign-in message signed by {account}: {signature}");

        Ok(SignedInUser { address: account, timestamp: now_ms })
    }
}

async fn request_addresses<P: WalletProvider>(provider: &P) -> Result<Vec<String>, SignInError> {
    match provider.request_addresses().await {
        Ok(addresses) => Ok(addresses),
        Err(ProviderError::UserRejected) => Err(SignInError::UserRejected),
        Err(ProviderError::RequestPending) => Err(SignInError::RequestAlreadyPending),
        Err(ProviderError::Rpc { code, message }) => {
            log::debug!("address request failed (code {code:?}: {message}), trying legacy request");
            provider
                .legacy_request_accounts()
                .await
                .map_err(SignInError::from_address_request)
        }
    }
}
