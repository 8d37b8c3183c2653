#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! SeaORM backend for `scopekit-search`.
//!
//! Entities opt in with [`ScopedEntity`]; resources map their fields with
//! [`FieldToColumn`] and get a ready [`SeaSearchRepository`].

pub mod cond;
pub mod config;
pub mod entity;
pub mod repo;

pub use cond::{predicate_condition, scope_condition};
pub use config::{DbConfig, connect};
pub use entity::{FieldToColumn, ScopedEntity};
pub use repo::SeaSearchRepository;
