#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Tenant-scoped search.
//!
//! Resources describe their fields with [`SearchField`], their filters with
//! [`SearchFilters`], and their storage with [`SearchRepository`]. The
//! [`SearchEngine`] ties these together and guarantees that every query is
//! confined to the caller's organization.

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod filter;
pub mod mapper;
pub mod page;
pub mod pagination;
pub mod predicate;
pub mod problem_mapping;
pub mod repo;
pub mod request;
pub mod scope;
pub mod sort;

pub use audit::{AuditError, AuditEvent, AuditPolicy, AuditSink, TracingAuditSink};
pub use config::SearchConfig;
pub use engine::{ResourceSpec, SearchEngine};
pub use error::SearchError;
pub use field::{FieldKind, SearchField};
pub use filter::Filter;
pub use mapper::{CanonicalTimestamp, canonical, canonical_opt};
pub use page::ResultPage;
pub use pagination::{EmptyPages, InvalidPaging, PageNumbering, PageWindow, Pagination, PagingPolicy};
pub use predicate::{Clause, Predicate, PredicateBuilder, Value, contains_ignore_ascii_case, like_contains_pattern};
pub use repo::{SearchRepository, StorageError};
pub use request::{SearchFilters, SearchRequest};
pub use scope::{Ownership, ScopeClause, ScopeEnforcer};
pub use sort::{Sort, SortDir, resolve_sort, resolve_sort_pair, with_tiebreaker};
