use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::presentation::config::AccessSettings;

const EXTENSION_SCHEME: &str = "chrome-extension";
const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Decides whether a caller may use the API, from its origin and token.
///
/// A request passes when its origin host is an allow-listed domain (or a
/// subdomain of one), is a loopback host, or is the configured browser
/// extension presenting the SHA-256 hex digest of the shared token.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    allowed_domains: Vec<String>,
    extension_id: Option<String>,
    extension_token_digest: Option<String>,
}

impl AccessPolicy {
    pub fn new(
        allowed_origins: &[String],
        extension_id: Option<String>,
        extension_token: Option<&str>,
    ) -> Self {
        let allowed_domains = allowed_origins
            .iter()
            .filter_map(|origin| normalize_domain(origin))
            .collect();

        Self {
            allowed_domains,
            extension_id: extension_id.filter(|id| !id.trim().is_empty()),
            extension_token_digest: extension_token
                .filter(|t| !t.is_empty())
                .map(hash_token),
        }
    }

    pub fn from_settings(settings: &AccessSettings) -> Self {
        Self::new(
            &settings.allowed_origins,
            settings.extension_id.clone(),
            settings.extension_token.as_deref(),
        )
    }

    pub fn is_allowed(&self, origin: Option<&str>, token: Option<&str>) -> bool {
        let Some(url) = origin.and_then(|o| Url::parse(o.trim()).ok()) else {
            return false;
        };

        if url.scheme() == EXTENSION_SCHEME {
            return self.is_trusted_extension(&url, token);
        }

        let Some(host) = url.host_str().map(|h| h.to_ascii_lowercase()) else {
            return false;
        };

        LOCAL_HOSTS.contains(&host.as_str())
            || self
                .allowed_domains
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
    }

    fn is_trusted_extension(&self, url: &Url, token: Option<&str>) -> bool {
        let (Some(expected_id), Some(expected_digest)) =
            (&self.extension_id, &self.extension_token_digest)
        else {
            return false;
        };

        let id_matches = url
            .host_str()
            .is_some_and(|id| id.eq_ignore_ascii_case(expected_id));
        let token_matches = token
            .map(|t| t.trim().to_ascii_lowercase())
            .is_some_and(|t| constant_time_eq(t.as_bytes(), expected_digest.as_bytes()));

        id_matches && token_matches
    }
}

/// Lowercase hex SHA-256 of `token`, the form extensions send.
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

fn normalize_domain(origin: &str) -> Option<String> {
    let origin = origin.trim();
    if origin.is_empty() {
        return None;
    }

    let host = match Url::parse(origin) {
        Ok(url) if url.host_str().is_some() => url.host_str().map(str::to_string),
        _ => Some(strip_port(origin.trim_end_matches('/')).to_string()),
    };

    host.map(|h| h.trim_start_matches("*.").to_ascii_lowercase())
}

/// `example.com:8080` parses as a URL with scheme `example.com` and no host.
fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
