//! Allow-listed search fields.
//!
//! A resource declares its filterable and sortable fields as an enum that
//! implements [`SearchField`]. Client-supplied names are only ever resolved
//! through [`SearchField::from_name`], so no raw string reaches storage.

use std::fmt;

/// Logical type of a field. Drives match semantics and value coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; string filters match by substring.
    Text,
    /// Codes, emails, enumerated statuses; string filters match exactly.
    Identifier,
    Uuid,
    I64,
    Bool,
    DateTimeUtc,
    Date,
}

impl FieldKind {
    #[must_use]
    pub fn is_substring_match(self) -> bool {
        matches!(self, FieldKind::Text)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Text => "text",
            FieldKind::Identifier => "identifier",
            FieldKind::Uuid => "uuid",
            FieldKind::I64 => "i64",
            FieldKind::Bool => "bool",
            FieldKind::DateTimeUtc => "datetime",
            FieldKind::Date => "date",
        };
        f.write_str(s)
    }
}

pub trait SearchField: Copy + Eq + std::hash::Hash + fmt::Debug + Send + Sync + 'static {
    /// Every field of the resource.
    const FIELDS: &'static [Self];

    /// Client-visible name, e.g. `created_at`.
    fn name(&self) -> &'static str;

    fn kind(&self) -> FieldKind;

    /// Whether clients may order by this field.
    fn is_sortable(&self) -> bool {
        true
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    fn sortable_from_name(name: &str) -> Option<Self> {
        Self::from_name(name).filter(|f| f.is_sortable())
    }
}
