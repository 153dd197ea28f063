//! Tenant errors

/// Errors from tenant configuration and status enforcement
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TenantError {
    #[error("single_tenant_id is required when mode is single")]
    MissingSingleTenantId,

    #[error("Organization is suspended. Contact your administrator.")]
    TenantSuspended,

    #[error("Organization has been archived. Read-only access only.")]
    TenantArchived,
}
