//! Error payloads shared by every scoped search surface.
//!
//! The crate is pure data: an RFC 9457 [`Problem`] and the static
//! [`ErrDef`] entries callers use to build one. Transport layers decide
//! how to put a `Problem` on the wire.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod problem;

pub use catalog::ErrDef;
pub use problem::{Problem, ValidationViolation};
