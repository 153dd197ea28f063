//! Organization-defined custom roles
//!
//! Unlike built-in roles, custom roles are owned by whoever constructs the
//! registry. The host application typically builds one per process at
//! startup from its role store.

use std::collections::HashMap;

use atrium_identity::RoleDefinition;

use crate::error::RbacError;
use crate::roles::built_in_role;

/// Input for a custom role definition
#[derive(Debug, Clone)]
pub struct CustomRole {
    pub slug: String,
    pub name: String,
    pub hierarchy_level: u8,
    pub permissions: Vec<String>,
    pub organization_id: Option<String>,
}

/// Registry of validated custom roles, keyed by slug
#[derive(Debug, Default)]
pub struct CustomRoleRegistry {
    roles: HashMap<String, RoleDefinition>,
}

impl CustomRoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register custom role definitions.
    ///
    /// Rules:
    /// - Hierarchy level must be 1..=100 (0 is reserved for super_admin)
    /// - Slug must be lowercase alphanumeric with hyphens and must not
    ///   shadow a built-in role
    /// - Permissions must be non-empty
    ///
    /// Returns the validated definitions in input order. On error, nothing
    /// from the failing call is registered.
    pub fn define(&mut self, roles: Vec<CustomRole>) -> Result<Vec<RoleDefinition>, RbacError> {
        let mut validated = Vec::with_capacity(roles.len());

        for role in roles {
            if role.hierarchy_level < 1 || role.hierarchy_level > 100 {
                return Err(RbacError::HierarchyLevelOutOfRange {
                    slug: role.slug,
                    level: role.hierarchy_level,
                });
            }

            if !atrium_identity::validation::validate_slug(&role.slug) {
                return Err(RbacError::InvalidSlug(role.slug));
            }

            if built_in_role(&role.slug).is_some() {
                return Err(RbacError::ReservedSlug(role.slug));
            }

            if role.permissions.is_empty() {
                return Err(RbacError::EmptyPermissions(role.slug));
            }

            validated.push(RoleDefinition {
                slug: role.slug,
                name: role.name,
                hierarchy_level: role.hierarchy_level,
                permissions: role.permissions,
            });
        }

        for def in &validated {
            tracing::debug!(slug = %def.slug, level = def.hierarchy_level, "registered custom role");
            self.roles.insert(def.slug.clone(), def.clone());
        }

        Ok(validated)
    }

    /// Look up a custom role by slug
    pub fn get(&self, slug: &str) -> Option<&RoleDefinition> {
        self.roles.get(slug)
    }

    /// Number of registered custom roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
