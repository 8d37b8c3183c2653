//! Storage-neutral predicates.
//!
//! Filters are turned into a conjunction of [`Clause`]s over allow-listed
//! fields. A [`Predicate`] can only be built with a [`ScopeClause`], and the
//! scope always leads the conjunction.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::field::{FieldKind, SearchField};
use crate::filter::Filter;
use crate::scope::ScopeClause;

/// A typed comparison value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    I64(i64),
    String(String),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I64(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Clause<F> {
    Eq { field: F, value: Value },
    IsNull { field: F },
    /// Substring match ignoring ASCII case, on every backend. Wildcards in
    /// `needle` are literal.
    Contains { field: F, needle: String },
    Gte { field: F, value: Value },
    Lte { field: F, value: Value },
    In { field: F, values: Vec<Value> },
}

impl<F: Copy> Clause<F> {
    #[must_use]
    pub fn field(&self) -> F {
        match self {
            Clause::Eq { field, .. }
            | Clause::IsNull { field }
            | Clause::Contains { field, .. }
            | Clause::Gte { field, .. }
            | Clause::Lte { field, .. }
            | Clause::In { field, .. } => *field,
        }
    }
}

/// Scope clause plus the conjunction of client filters.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate<F> {
    scope: ScopeClause,
    clauses: Vec<Clause<F>>,
}

impl<F> Predicate<F> {
    #[must_use]
    pub fn scope(&self) -> &ScopeClause {
        &self.scope
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause<F>] {
        &self.clauses
    }
}

/// Accumulates clauses from a filter struct.
///
/// Absent inputs contribute nothing, so an empty filter yields a predicate
/// that is just the scope.
#[derive(Debug)]
pub struct PredicateBuilder<F> {
    clauses: Vec<Clause<F>>,
}

impl<F> Default for PredicateBuilder<F> {
    fn default() -> Self {
        Self { clauses: Vec::new() }
    }
}

impl<F: SearchField> PredicateBuilder<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match on a non-nullable field. `MatchNull` is ignored.
    pub fn eq<T: Into<Value>>(&mut self, field: F, filter: Filter<T>) -> &mut Self {
        if let Filter::Value(v) = filter {
            self.clauses.push(Clause::Eq {
                field,
                value: v.into(),
            });
        }
        self
    }

    /// Exact match on a nullable field. `MatchNull` becomes `IS NULL`.
    pub fn eq_nullable<T: Into<Value>>(&mut self, field: F, filter: Filter<T>) -> &mut Self {
        match filter {
            Filter::Absent => {}
            Filter::MatchNull => self.clauses.push(Clause::IsNull { field }),
            Filter::Value(v) => self.clauses.push(Clause::Eq {
                field,
                value: v.into(),
            }),
        }
        self
    }

    /// String filter. Text fields match by substring, identifiers exactly.
    /// Blank input is treated as absent.
    pub fn text(&mut self, field: F, filter: Filter<String>) -> &mut Self {
        let Filter::Value(raw) = filter else {
            return self;
        };
        let needle = raw.trim();
        if needle.is_empty() {
            return self;
        }
        if field.kind().is_substring_match() {
            self.clauses.push(Clause::Contains {
                field,
                needle: needle.to_owned(),
            });
        } else {
            self.clauses.push(Clause::Eq {
                field,
                value: Value::String(needle.to_owned()),
            });
        }
        self
    }

    /// Inclusive range; either bound may be omitted.
    pub fn range<T: Into<Value>>(&mut self, field: F, from: Option<T>, to: Option<T>) -> &mut Self {
        if let Some(v) = from {
            self.clauses.push(Clause::Gte {
                field,
                value: v.into(),
            });
        }
        if let Some(v) = to {
            self.clauses.push(Clause::Lte {
                field,
                value: v.into(),
            });
        }
        self
    }

    /// Membership. An empty list is treated as absent.
    pub fn one_of<T: Into<Value>>(&mut self, field: F, values: Vec<T>) -> &mut Self {
        if !values.is_empty() {
            self.clauses.push(Clause::In {
                field,
                values: values.into_iter().map(Into::into).collect(),
            });
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    #[must_use]
    pub fn build(self, scope: ScopeClause) -> Predicate<F> {
        Predicate {
            scope,
            clauses: self.clauses,
        }
    }
}

/// Reference semantics of [`Clause::Contains`] for backends that evaluate
/// predicates in process.
#[must_use]
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

/// Lowercased substring pattern for `LOWER(col) LIKE ... ESCAPE '\'`.
#[must_use]
pub fn like_contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars().map(|c| c.to_ascii_lowercase()) {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

#[must_use]
pub(crate) fn kind_accepts(kind: FieldKind, value: &Value) -> bool {
    matches!(
        (kind, value),
        (FieldKind::Text | FieldKind::Identifier, Value::String(_))
            | (FieldKind::Uuid, Value::Uuid(_))
            | (FieldKind::I64, Value::I64(_))
            | (FieldKind::Bool, Value::Bool(_))
            | (FieldKind::DateTimeUtc, Value::DateTime(_))
            | (FieldKind::Date, Value::Date(_))
    )
}

impl<F: SearchField> Predicate<F> {
    /// Fields whose clause value does not match the field's declared kind.
    #[must_use]
    pub fn mistyped_fields(&self) -> impl Iterator<Item = F> + '_ {
        self.clauses.iter().filter_map(|c| {
            let field = c.field();
            let ok = match c {
                Clause::Eq { value, .. } | Clause::Gte { value, .. } | Clause::Lte { value, .. } => {
                    kind_accepts(field.kind(), value)
                }
                Clause::In { values, .. } => values.iter().all(|v| kind_accepts(field.kind(), v)),
                Clause::Contains { .. } => field.kind().is_substring_match(),
                Clause::IsNull { .. } => true,
            };
            (!ok).then_some(field)
        })
    }
}
