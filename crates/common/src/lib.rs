//! Shared platform infrastructure for Atrium
//!
//! This crate provides the pieces every Atrium product crate relies on:
//! - The platform error contract and its HTTP response mapping
//! - The API response envelope (success / error / paginated)
//! - The audit emitter capability for security-sensitive flows

pub mod audit;
pub mod error;
pub mod response;

pub use audit::{AuditEmitter, AuditEvent, InMemoryAuditEmitter};
pub use error::{Error, Result};
pub use response::{
    error_response, paginated_response, success_response, PaginationMeta, PaginationParams,
};
