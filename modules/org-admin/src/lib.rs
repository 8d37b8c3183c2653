//! Organization administration: scoped invoice and member search.
//!
//! Callers are bound to one organization through `org_assignments`; every
//! search runs inside that organization and, for invoices, inside the
//! caller's own rows unless the caller is a manager.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod demo;
pub mod domain;
pub mod infra;

pub use config::OrgAdminConfig;
pub use domain::filters::{InvoiceFilter, MemberFilter};
pub use domain::models::{InvoiceSummary, MemberSummary};
pub use domain::service::OrgAdminService;
pub use infra::storage::migrations::Migrator;

#[cfg(test)]
pub mod test_support;
