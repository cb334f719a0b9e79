use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::test_support::ManualClock;

const ACCOUNT: &str = "0xAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaa";

#[derive(Clone)]
struct FakeProvider {
    addresses: Result<Vec<String>, ProviderError>,
    legacy: Result<Vec<String>, ProviderError>,
    signature: Result<String, ProviderError>,
    yield_first: bool,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeProvider {
    fn happy() -> Self {
        Self {
            addresses: Ok(vec![ACCOUNT.to_owned(), "0x0000000000000000000000000000000000000001".to_owned()]),
            legacy: Ok(vec![]),
            signature: Ok("0xsig".to_owned()),
            yield_first: false,
            calls: Rc::default(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeProvider {
    async fn request_addresses(&self) -> Result<Vec<String>, ProviderError> {
        self.calls.borrow_mut().push("request_addresses".to_owned());
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        self.addresses.clone()
    }

    async fn legacy_request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.calls.borrow_mut().push("legacy_request_accounts".to_owned());
        self.legacy.clone()
    }

    async fn sign_message(&self, account: &Address, message: &str) -> Result<String, ProviderError> {
        self.calls.borrow_mut().push(format!("sign_message {account} {message}"));
        self.signature.clone()
    }
}

struct FakeResolver(Option<FakeProvider>);

impl ProviderResolver for FakeResolver {
    type Provider = FakeProvider;

    fn resolve(&self) -> Option<FakeProvider> {
        self.0.clone()
    }
}

fn session(provider: Option<FakeProvider>) -> WalletSession<FakeResolver, Rc<ManualClock>> {
    WalletSession::with_clock(FakeResolver(provider), ManualClock::at(1_700_000_000_000), AppConfig::default())
}

// =============================================================================
// from_rpc classification
// =============================================================================

#[test]
fn rpc_codes_are_classified() {
    assert_eq!(ProviderError::from_rpc(Some(4001), "x"), ProviderError::UserRejected);
    assert_eq!(ProviderError::from_rpc(Some(-32002), "x"), ProviderError::RequestPending);
    assert_eq!(
        ProviderError::from_rpc(Some(-32603), "internal"),
        ProviderError::Rpc { code: Some(-32603), message: "internal".to_owned() }
    );
    assert_eq!(
        ProviderError::from_rpc(None, "boom"),
        ProviderError::Rpc { code: None, message: "boom".to_owned() }
    );
}

#[test]
fn personal_sign_payload_is_hex_of_utf8() {
    assert_eq!(personal_sign_payload("hi"), "0x6869");
    assert_eq!(personal_sign_payload(""), "0x");
}

// =============================================================================
// happy path
// =============================================================================

#[tokio::test]
async fn sign_in_uses_first_address_lowercased() {
    let provider = FakeProvider::happy();
    let session = session(Some(provider.clone()));

    let user = session.sign_in().await.unwrap();

    assert_eq!(user.address.to_string(), ACCOUNT.to_lowercase());
    assert_eq!(user.timestamp, 1_700_000_000_000);
    assert!(!session.is_signing_in());
    assert_eq!(
        provider.calls(),
        vec![
            "request_addresses".to_owned(),
            format!("sign_message {} Sign in to Base Claim at 1700000000000", ACCOUNT.to_lowercase()),
        ]
    );
}

// =============================================================================
// failure classification
// =============================================================================

#[tokio::test]
async fn missing_provider_is_unavailable() {
    let err = session(None).sign_in().await.unwrap_err();
    assert_eq!(err, SignInError::ProviderUnavailable);
    assert_eq!(err.user_message(), "Wallet extension not detected. Please install it first.");
}

#[tokio::test]
async fn zero_addresses_is_no_account_selected() {
    let provider = FakeProvider { addresses: Ok(vec![]), ..FakeProvider::happy() };
    let session = session(Some(provider.clone()));

    assert_eq!(session.sign_in().await, Err(SignInError::NoAccountSelected));
    assert!(!provider.calls().iter().any(|c| c.starts_with("sign_message")));
}

#[tokio::test]
async fn rejection_on_address_step_is_user_rejected() {
    let provider = FakeProvider { addresses: Err(ProviderError::UserRejected), ..FakeProvider::happy() };
    let session = session(Some(provider.clone()));

    assert_eq!(session.sign_in().await, Err(SignInError::UserRejected));
    assert_eq!(provider.calls(), vec!["request_addresses".to_owned()]);
    assert!(!session.is_signing_in());
}

#[tokio::test]
async fn rejection_on_signature_step_is_user_rejected() {
    let provider = FakeProvider { signature: Err(ProviderError::UserRejected), ..FakeProvider::happy() };
    let err = session(Some(provider)).sign_in().await.unwrap_err();
    assert_eq!(err, SignInError::UserRejected);
    assert_eq!(err.user_message(), "You rejected the sign-in request.");
}

#[tokio::test]
async fn pending_request_is_reported() {
    let provider = FakeProvider { addresses: Err(ProviderError::RequestPending), ..FakeProvider::happy() };
    let err = session(Some(provider)).sign_in().await.unwrap_err();
    assert_eq!(err, SignInError::RequestAlreadyPending);
    assert_eq!(err.user_message(), "A sign-in request is already pending. Check your wallet.");
}

#[tokio::test]
async fn other_address_error_falls_back_to_legacy_request() {
    let provider = FakeProvider {
        addresses: Err(ProviderError::from_rpc(Some(-32601), "method not found")),
        legacy: Ok(vec![ACCOUNT.to_owned()]),
        ..FakeProvider::happy()
    };
    let session = session(Some(provider.clone()));

    let user = session.sign_in().await.unwrap();

    assert_eq!(user.address.to_string(), ACCOUNT.to_lowercase());
    assert_eq!(provider.calls()[..2], ["request_addresses".to_owned(), "legacy_request_accounts".to_owned()]);
}

#[tokio::test]
async fn failed_legacy_request_is_provider_failure() {
    let provider = FakeProvider {
        addresses: Err(ProviderError::from_rpc(None, "transport closed")),
        legacy: Err(ProviderError::from_rpc(None, "still closed")),
        ..FakeProvider::happy()
    };
    let err = session(Some(provider)).sign_in().await.unwrap_err();
    assert_eq!(err, SignInError::ProviderFailure("still closed".to_owned()));
    assert_eq!(err.user_message(), "Sign in failed: still closed");
}

#[tokio::test]
async fn legacy_rejection_is_user_rejected() {
    let provider = FakeProvider {
        addresses: Err(ProviderError::from_rpc(None, "nope")),
        legacy: Err(ProviderError::UserRejected),
        ..FakeProvider::happy()
    };
    assert_eq!(session(Some(provider)).sign_in().await, Err(SignInError::UserRejected));
}

#[tokio::test]
async fn signing_error_carries_provider_text() {
    let provider = FakeProvider {
        signature: Err(ProviderError::from_rpc(Some(-32603), "ledger locked")),
        ..FakeProvider::happy()
    };
    let err = session(Some(provider)).sign_in().await.unwrap_err();
    assert_eq!(err, SignInError::SigningFailed("ledger locked".to_owned()));
    assert_eq!(err.user_message(), "Signing failed: ledger locked");
}

#[tokio::test]
async fn malformed_address_is_invalid() {
    let provider = FakeProvider { addresses: Ok(vec!["not-an-address".to_owned()]), ..FakeProvider::happy() };
    let err = session(Some(provider)).sign_in().await.unwrap_err();
    assert!(matches!(err, SignInError::InvalidAddress(_)));
}

// =============================================================================
// in-flight guard
// =============================================================================

#[tokio::test]
async fn concurrent_sign_in_is_rejected_without_touching_provider() {
    let provider = FakeProvider { yield_first: true, ..FakeProvider::happy() };
    let session = session(Some(provider.clone()));

    let (first, second) = tokio::join!(session.sign_in(), session.sign_in());

    assert!(first.is_ok());
    assert_eq!(second, Err(SignInError::RequestAlreadyPending));
    let address_requests = provider.calls().iter().filter(|c| *c == "request_addresses").count();
    assert_eq!(address_requests, 1);
}

#[tokio::test]
async fn retry_after_failure_is_allowed() {
    let provider = FakeProvider { addresses: Err(ProviderError::UserRejected), ..FakeProvider::happy() };
    let session = session(Some(provider));
    assert!(session.sign_in().await.is_err());
    assert!(!session.is_signing_in());
    assert_eq!(session.sign_in().await, Err(SignInError::UserRejected));
}
