//! Tenant status enforcement

use atrium_identity::OrganizationStatus;

use crate::error::TenantError;

/// Gate a request on the organization's status.
///
/// Active tenants pass; suspended and archived tenants are rejected with
/// the stable user-facing messages the apps display verbatim.
pub fn check_tenant_status(status: OrganizationStatus) -> Result<(), TenantError> {
    match status {
        OrganizationStatus::Active => Ok(()),
        OrganizationStatus::Suspended => {
            tracing::debug!("request rejected: tenant suspended");
            Err(TenantError::TenantSuspended)
        }
        OrganizationStatus::Archived => {
            tracing::debug!("request rejected: tenant archived");
            Err(TenantError::TenantArchived)
        }
    }
}
