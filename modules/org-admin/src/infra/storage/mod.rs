//! SeaORM persistence for invoices, members and organization assignments.
//!
//! - `entity/` table definitions and their scope columns
//! - `columns` search field to column mapping
//! - `mapper` model to summary conversion
//! - `assignments_repo` the assignment directory backing scope resolution
//! - `migrations/` schema

pub mod assignments_repo;
pub mod columns;
pub mod entity;
pub mod mapper;
pub mod migrations;

pub use assignments_repo::SeaAssignmentDirectory;
pub use columns::{InvoiceColumns, MemberColumns};
