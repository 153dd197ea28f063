//! Multi-tenant support for the Atrium platform
//!
//! Resolves tenant configuration, extracts the tenant identifier from a
//! request (subdomain, header, or query string), and enforces tenant
//! status before a request proceeds.

mod config;
mod error;
mod extraction;
mod status;

pub use config::{
    ExtractionSource, ResolvedSubdomainConfig, ResolvedTenantConfig, SubdomainConfig, TenantConfig,
    TenantMode, DEFAULT_EXCLUDED_SUBDOMAINS,
};
pub use error::TenantError;
pub use extraction::{
    extract_tenant_from_header, extract_tenant_from_query, extract_tenant_from_subdomain,
};
pub use status::check_tenant_status;
