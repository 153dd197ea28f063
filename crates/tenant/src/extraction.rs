//! Tenant identifier extraction
//!
//! Pure helpers the host middleware composes according to the resolved
//! extraction source list. Each returns `None` rather than erroring when
//! the request simply carries no tenant signal.

use axum::http::HeaderMap;
use url::Url;

use crate::config::ResolvedSubdomainConfig;

/// Extract a tenant slug from a hostname like `acme.example.com`.
///
/// The hostname must be exactly one label under the base domain, and the
/// label must not be in the excluded set. Nested subdomains are not
/// tenants.
pub fn extract_tenant_from_subdomain(
    hostname: &str,
    config: &ResolvedSubdomainConfig,
) -> Option<String> {
    let suffix = format!(".{}", config.base_domain);
    let subdomain = hostname.strip_suffix(&suffix)?;

    if subdomain.is_empty() || subdomain.contains('.') {
        return None;
    }

    if config
        .exclude_subdomains
        .iter()
        .any(|excluded| excluded == subdomain)
    {
        return None;
    }

    Some(subdomain.to_string())
}

/// Extract a tenant identifier from a request header.
/// Non-UTF-8 header values are treated as absent.
pub fn extract_tenant_from_header(headers: &HeaderMap, header_name: &str) -> Option<String> {
    headers
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Extract a tenant identifier from a URL query parameter.
/// Unparseable URLs yield `None`.
pub fn extract_tenant_from_query(url: &str, param_name: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == param_name)
        .map(|(_, value)| value.into_owned())
}
