use plainify::presentation::access::{AccessPolicy, hash_token};

const EXTENSION_ID: &str = "abcdefghijklmnopabcdefghijklmnop";
const SHARED_TOKEN: &str = "shared-secret";

fn policy() -> AccessPolicy {
    AccessPolicy::new(
        &["plainify.app".to_string(), "https://partner.org/".to_string()],
        Some(EXTENSION_ID.to_string()),
        Some(SHARED_TOKEN),
    )
}

#[test]
fn given_allow_listed_domain_when_checking_then_allows() {
    assert!(policy().is_allowed(Some("https://plainify.app"), None));
    assert!(policy().is_allowed(Some("https://partner.org"), None));
}

#[test]
fn given_subdomain_of_allowed_domain_when_checking_then_allows() {
    assert!(policy().is_allowed(Some("https://www.plainify.app"), None));
}

#[test]
fn given_lookalike_domain_when_checking_then_denies() {
    assert!(!policy().is_allowed(Some("https://evilplainify.app"), None));
    assert!(!policy().is_allowed(Some("https://plainify.app.evil.com"), None));
}

#[test]
fn given_loopback_origin_when_checking_then_allows() {
    assert!(policy().is_allowed(Some("http://localhost:5173"), None));
    assert!(policy().is_allowed(Some("http://127.0.0.1:3000"), None));
}

#[test]
fn given_missing_or_garbage_origin_when_checking_then_denies() {
    assert!(!policy().is_allowed(None, None));
    assert!(!policy().is_allowed(Some("not a url"), None));
}

#[test]
fn given_extension_with_hashed_token_when_checking_then_allows() {
    let origin = format!("chrome-extension://{EXTENSION_ID}");
    let token = hash_token(SHARED_TOKEN);

    assert!(policy().is_allowed(Some(&origin), Some(&token)));
}

#[test]
fn given_extension_with_raw_or_missing_token_when_checking_then_denies() {
    let origin = format!("chrome-extension://{EXTENSION_ID}");

    assert!(!policy().is_allowed(Some(&origin), Some(SHARED_TOKEN)));
    assert!(!policy().is_allowed(Some(&origin), None));
}

#[test]
fn given_unknown_extension_id_when_checking_then_denies() {
    let token = hash_token(SHARED_TOKEN);

    assert!(!policy().is_allowed(Some("chrome-extension://someotherextension"), Some(&token)));
}

#[test]
fn given_no_extension_configured_when_extension_calls_then_denies() {
    let policy = AccessPolicy::new(&["plainify.app".to_string()], None, None);
    let origin = format!("chrome-extension://{EXTENSION_ID}");
    let token = hash_token(SHARED_TOKEN);

    assert!(!policy.is_allowed(Some(&origin), Some(&token)));
}

#[test]
fn given_allow_list_entry_with_port_when_checking_then_matches_host() {
    let policy = AccessPolicy::new(&["partner.org:8443".to_string()], None, None);

    assert!(policy.is_allowed(Some("https://partner.org:8443"), None));
    assert!(policy.is_allowed(Some("https://app.partner.org"), None));
}
