//! Tenant configuration resolution
//!
//! Callers build a partial `TenantConfig`; `resolve` fills in platform
//! defaults and rejects inconsistent combinations.

use serde::{Deserialize, Serialize};

use crate::error::TenantError;

/// Subdomains that never identify a tenant
pub const DEFAULT_EXCLUDED_SUBDOMAINS: [&str; 7] =
    ["www", "api", "admin", "auth", "mail", "cdn", "static"];

/// Where a tenant identifier may come from, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    Session,
    Subdomain,
    Header,
    Query,
}

/// Single- vs multi-tenant deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantMode {
    Multi,
    Single,
}

/// Subdomain extraction settings as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct SubdomainConfig {
    pub base_domain: String,
    pub exclude_subdomains: Vec<String>,
}

/// Caller-supplied tenant configuration; unset fields fall back to defaults
#[derive(Debug, Clone)]
pub struct TenantConfig {
    pub mode: TenantMode,
    pub extraction_sources: Option<Vec<ExtractionSource>>,
    pub single_tenant_id: Option<String>,
    pub subdomain: Option<SubdomainConfig>,
    pub header_name: Option<String>,
    pub query_param: Option<String>,
    pub status_enforcement: Option<bool>,
}

impl TenantConfig {
    pub fn multi() -> Self {
        Self {
            mode: TenantMode::Multi,
            extraction_sources: None,
            single_tenant_id: None,
            subdomain: None,
            header_name: None,
            query_param: None,
            status_enforcement: None,
        }
    }

    pub fn single(tenant_id: impl Into<String>) -> Self {
        Self {
            single_tenant_id: Some(tenant_id.into()),
            mode: TenantMode::Single,
            ..Self::multi()
        }
    }

    /// Resolve against platform defaults
    pub fn resolve(self) -> Result<ResolvedTenantConfig, TenantError> {
        if self.mode == TenantMode::Single && self.single_tenant_id.is_none() {
            return Err(TenantError::MissingSingleTenantId);
        }

        let subdomain = self.subdomain.map(|cfg| {
            let mut excludes: Vec<String> = DEFAULT_EXCLUDED_SUBDOMAINS
                .iter()
                .map(|s| s.to_string())
                .collect();
            for custom in cfg.exclude_subdomains {
                if !excludes.contains(&custom) {
                    excludes.push(custom);
                }
            }
            ResolvedSubdomainConfig {
                base_domain: cfg.base_domain,
                exclude_subdomains: excludes,
            }
        });

        Ok(ResolvedTenantConfig {
            mode: self.mode,
            extraction_sources: self
                .extraction_sources
                .unwrap_or_else(|| vec![ExtractionSource::Session]),
            single_tenant_id: self.single_tenant_id,
            subdomain,
            header_name: self
                .header_name
                .unwrap_or_else(|| "X-Tenant-ID".to_string()),
            query_param: self.query_param.unwrap_or_else(|| "tenantId".to_string()),
            status_enforcement: self.status_enforcement.unwrap_or(true),
        })
    }
}

/// Subdomain settings with the default exclusions merged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSubdomainConfig {
    pub base_domain: String,
    pub exclude_subdomains: Vec<String>,
}

/// Fully resolved tenant configuration
#[derive(Debug, Clone)]
pub struct ResolvedTenantConfig {
    pub mode: TenantMode,
    pub extraction_sources: Vec<ExtractionSource>,
    pub single_tenant_id: Option<String>,
    pub subdomain: Option<ResolvedSubdomainConfig>,
    pub header_name: String,
    pub query_param: String,
    pub status_enforcement: bool,
}
