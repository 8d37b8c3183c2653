//! Sort token resolution.
//!
//! Accepted token forms, all case-insensitive:
//! - `field` (ascending)
//! - `field:asc`, `field:desc`
//! - `+field`, `-field`
//!
//! plus the separate `order_by` / `order_direction` pair. Anything that does
//! not name a sortable field falls back to the resource default; sorting
//! never fails a request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::SearchField;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Some(SortDir::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(SortDir::Desc)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub dir: SortDir,
}

impl<F> Sort<F> {
    #[must_use]
    pub fn asc(field: F) -> Self {
        Self {
            field,
            dir: SortDir::Asc,
        }
    }

    #[must_use]
    pub fn desc(field: F) -> Self {
        Self {
            field,
            dir: SortDir::Desc,
        }
    }
}

impl<F: SearchField> fmt::Display for Sort<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field.name(), self.dir)
    }
}

/// Resolves a single sort token against the allow-list of `F`.
#[must_use]
pub fn resolve_sort<F: SearchField>(token: Option<&str>, default: Sort<F>) -> Sort<F> {
    let Some(raw) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return default;
    };

    let (name, dir) = if let Some(rest) = raw.strip_prefix('+') {
        (rest, SortDir::Asc)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (rest, SortDir::Desc)
    } else if let Some((name, dir)) = raw.split_once(':') {
        (name, SortDir::parse(dir).unwrap_or(default.dir))
    } else {
        (raw, SortDir::Asc)
    };

    match F::sortable_from_name(name.trim()) {
        Some(field) => Sort { field, dir },
        None => {
            tracing::debug!(token = raw, fallback = %default, "unknown sort field, using default");
            default
        }
    }
}

/// Resolves the `order_by` / `order_direction` pair.
///
/// An unknown field yields the full default; an unknown direction keeps the
/// field and uses the default direction.
#[must_use]
pub fn resolve_sort_pair<F: SearchField>(
    order_by: Option<&str>,
    order_direction: Option<&str>,
    default: Sort<F>,
) -> Sort<F> {
    let Some(name) = order_by.map(str::trim).filter(|t| !t.is_empty()) else {
        return default;
    };
    let Some(field) = F::sortable_from_name(name) else {
        tracing::debug!(order_by = name, fallback = %default, "unknown sort field, using default");
        return default;
    };
    let dir = match order_direction.map(str::trim).filter(|d| !d.is_empty()) {
        None => SortDir::Asc,
        Some(d) => SortDir::parse(d).unwrap_or(default.dir),
    };
    Sort { field, dir }
}

/// Primary order followed by a unique tiebreaker, so pages are stable.
#[must_use]
pub fn with_tiebreaker<F: SearchField>(primary: Sort<F>, tiebreaker: Option<F>) -> Vec<Sort<F>> {
    let mut order = vec![primary];
    if let Some(tb) = tiebreaker
        && tb != primary.field
    {
        order.push(Sort {
            field: tb,
            dir: primary.dir,
        });
    }
    order
}
