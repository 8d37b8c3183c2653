//! Static error definitions.

use crate::problem::Problem;
use http::StatusCode;

/// One catalog entry: everything about a problem except the detail text.
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
    pub type_url: &'static str,
}

impl ErrDef {
    /// Build a [`Problem`] from this entry.
    ///
    /// A status outside the HTTP range degrades to 500.
    #[inline]
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Problem::new(status, self.title, detail)
            .with_code(self.code)
            .with_type(self.type_url)
    }
}
