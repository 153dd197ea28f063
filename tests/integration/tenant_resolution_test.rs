//! Tenant resolution across extraction sources
//!
//! Exercises the resolved tenant configuration against the extraction
//! helpers the way the host middleware chains them.

use axum::http::{HeaderMap, HeaderValue};

use atrium_tenant::{
    extract_tenant_from_header, extract_tenant_from_query, extract_tenant_from_subdomain,
    ExtractionSource, SubdomainConfig, TenantConfig, TenantError, TenantMode,
};

#[test]
fn multi_tenant_request_resolves_through_the_source_chain() {
    let mut config = TenantConfig::multi();
    config.extraction_sources = Some(vec![
        ExtractionSource::Subdomain,
        ExtractionSource::Header,
        ExtractionSource::Query,
    ]);
    config.subdomain = Some(SubdomainConfig {
        base_domain: "atrium.app".to_string(),
        exclude_subdomains: vec!["status".to_string()],
    });
    let resolved = config.resolve().unwrap();

    let subdomain_config = resolved.subdomain.as_ref().unwrap();

    // Subdomain wins when present
    assert_eq!(
        extract_tenant_from_subdomain("acme.atrium.app", subdomain_config),
        Some("acme".to_string())
    );

    // Excluded subdomains fall through to the header
    assert_eq!(
        extract_tenant_from_subdomain("status.atrium.app", subdomain_config),
        None
    );
    let mut headers = HeaderMap::new();
    headers.insert("X-Tenant-ID", HeaderValue::from_static("acme"));
    assert_eq!(
        extract_tenant_from_header(&headers, &resolved.header_name),
        Some("acme".to_string())
    );

    // And the query string is the last resort
    assert_eq!(
        extract_tenant_from_query(
            "https://atrium.app/dashboard?tenantId=acme",
            &resolved.query_param
        ),
        Some("acme".to_string())
    );
}

#[test]
fn single_tenant_mode_pins_the_tenant() {
    let resolved = TenantConfig::single("acme").resolve().unwrap();
    assert_eq!(resolved.mode, TenantMode::Single);
    assert_eq!(resolved.single_tenant_id.as_deref(), Some("acme"));

    let mut broken = TenantConfig::single("acme");
    broken.single_tenant_id = None;
    assert_eq!(
        broken.resolve().unwrap_err(),
        TenantError::MissingSingleTenantId
    );
}
