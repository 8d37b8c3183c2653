use std::sync::Arc;

use sea_orm::DatabaseConnection;

use scopekit_db::SeaSearchRepository;
use scopekit_search::{
    AuditSink, Ownership, ResourceSpec, ResultPage, SearchEngine, SearchError, SearchRequest, Sort,
};
use scopekit_security::{DirectoryScopeResolver, ScopeResolver, SecurityContext};

use crate::config::OrgAdminConfig;
use crate::domain::fields::{InvoiceField, MemberField};
use crate::domain::filters::{InvoiceFilter, MemberFilter};
use crate::domain::models::{InvoiceSummary, MemberSummary};
use crate::infra::storage::{InvoiceColumns, MemberColumns, SeaAssignmentDirectory};

pub type InvoiceRepository = SeaSearchRepository<InvoiceColumns, InvoiceField>;
pub type MemberRepository = SeaSearchRepository<MemberColumns, MemberField>;

/// Invoices are owned: members only see the invoices they issued.
#[must_use]
pub fn invoice_resource() -> ResourceSpec<InvoiceField> {
    ResourceSpec {
        name: "invoices",
        default_sort: Sort::desc(InvoiceField::IssuedAt),
        tiebreaker: Some(InvoiceField::Id),
        ownership: Ownership::Owned,
    }
}

#[must_use]
pub fn member_resource() -> ResourceSpec<MemberField> {
    ResourceSpec {
        name: "members",
        default_sort: Sort::asc(MemberField::DisplayName),
        tiebreaker: Some(MemberField::Id),
        ownership: Ownership::Shared,
    }
}

/// Organization administration searches.
pub struct OrgAdminService {
    invoices: SearchEngine<InvoiceRepository, InvoiceSummary>,
    members: SearchEngine<MemberRepository, MemberSummary>,
}

impl OrgAdminService {
    #[must_use]
    pub fn new(db: DatabaseConnection, resolver: Arc<dyn ScopeResolver>, config: OrgAdminConfig) -> Self {
        Self {
            invoices: SearchEngine::new(
                invoice_resource(),
                InvoiceRepository::new(db.clone()),
                resolver.clone(),
                InvoiceSummary::from,
                config.invoices,
            ),
            members: SearchEngine::new(
                member_resource(),
                MemberRepository::new(db),
                resolver,
                MemberSummary::from,
                config.members,
            ),
        }
    }

    /// Resolves callers through the `org_assignments` table of `db`.
    #[must_use]
    pub fn from_db(db: DatabaseConnection, config: OrgAdminConfig) -> Self {
        let directory = Arc::new(SeaAssignmentDirectory::new(db.clone()));
        Self::new(db, Arc::new(DirectoryScopeResolver::new(directory)), config)
    }

    #[must_use]
    pub fn with_audit(self, sink: Arc<dyn AuditSink>) -> Self {
        Self {
            invoices: self.invoices.with_audit(sink.clone()),
            members: self.members.with_audit(sink),
        }
    }

    /// # Errors
    /// See [`SearchError`].
    pub async fn search_invoices(
        &self,
        ctx: &SecurityContext,
        request: SearchRequest<InvoiceFilter>,
    ) -> Result<ResultPage<InvoiceSummary>, SearchError> {
        self.invoices.search(ctx, request).await
    }

    /// # Errors
    /// See [`SearchError`].
    pub async fn search_members(
        &self,
        ctx: &SecurityContext,
        request: SearchRequest<MemberFilter>,
    ) -> Result<ResultPage<MemberSummary>, SearchError> {
        self.members.search(ctx, request).await
    }
}

#[cfg(test)]
mod tests_invoices;
#[cfg(test)]
mod tests_members;
#[cfg(test)]
mod tests_security_scoping;
