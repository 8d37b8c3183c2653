//! The search pipeline.
//!
//! Every request goes through the same stages: normalize paging, resolve the
//! caller's scope, build the predicate, resolve ordering, count and fetch
//! concurrently, map rows, compute pagination, audit. A failure in any stage
//! ends the request with a typed error.

use std::sync::Arc;

use serde::Serialize;

use scopekit_security::{ScopeResolver, ScopedActor, SecurityContext};

use crate::audit::{AuditError, AuditEvent, AuditPolicy, AuditSink};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::field::SearchField;
use crate::page::ResultPage;
use crate::pagination::Pagination;
use crate::predicate::PredicateBuilder;
use crate::repo::SearchRepository;
use crate::request::{SearchFilters, SearchRequest};
use crate::scope::{Ownership, ScopeEnforcer};
use crate::sort::{Sort, resolve_sort, resolve_sort_pair, with_tiebreaker};

/// Static description of a searchable resource.
#[derive(Clone, Debug)]
pub struct ResourceSpec<F> {
    /// Used for span fields and audit actions.
    pub name: &'static str,
    pub default_sort: Sort<F>,
    /// Unique field appended to every ordering.
    pub tiebreaker: Option<F>,
    pub ownership: Ownership,
}

type RowMapper<Row, T> = Arc<dyn Fn(Row) -> T + Send + Sync>;

pub struct SearchEngine<R: SearchRepository, T> {
    resource: ResourceSpec<R::Field>,
    repo: R,
    map: RowMapper<R::Row, T>,
    resolver: Arc<dyn ScopeResolver>,
    audit: Option<Arc<dyn AuditSink>>,
    config: SearchConfig,
}

impl<R, T> SearchEngine<R, T>
where
    R: SearchRepository,
    T: Serialize + Send,
{
    #[must_use]
    pub fn new(
        resource: ResourceSpec<R::Field>,
        repo: R,
        resolver: Arc<dyn ScopeResolver>,
        map: impl Fn(R::Row) -> T + Send + Sync + 'static,
        config: SearchConfig,
    ) -> Self {
        Self {
            resource,
            repo,
            map: Arc::new(map),
            resolver,
            audit: None,
            config,
        }
    }

    #[must_use]
    pub fn with_audit(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Runs one search for the caller in `ctx`.
    ///
    /// # Errors
    /// - [`SearchError::Validation`] for rejected paging or mistyped filters
    /// - [`SearchError::Scope`] when the caller cannot be bound to an organization
    /// - [`SearchError::Authorization`] for a foreign organization filter
    /// - [`SearchError::Storage`] when counting or fetching fails
    /// - [`SearchError::Audit`] when auditing is required and fails
    #[tracing::instrument(
        name = "search",
        skip_all,
        fields(resource = self.resource.name, subject_id = tracing::field::Empty)
    )]
    pub async fn search<Q>(
        &self,
        ctx: &SecurityContext,
        request: SearchRequest<Q>,
    ) -> Result<ResultPage<T>, SearchError>
    where
        Q: SearchFilters<Field = R::Field>,
    {
        let policy = self.config.paging_policy();
        let window = policy.normalize(request.page, request.limit)?;

        let actor = self.resolver.resolve(ctx).await?;
        tracing::Span::current().record("subject_id", tracing::field::display(actor.subject_id()));
        ScopeEnforcer::guard_requested_organization(&actor, request.filters.requested_organization())?;
        let scope = ScopeEnforcer::scope(&actor, self.resource.ownership, request.include_deleted);

        let mut builder = PredicateBuilder::new();
        request.filters.apply(&mut builder);
        let predicate = builder.build(scope);
        if let Some(field) = predicate.mistyped_fields().next() {
            return Err(SearchError::validation(
                field.name(),
                format!("expected a {} value", field.kind()),
            ));
        }

        let primary = match request.sort_token() {
            Some(token) => resolve_sort(Some(token), self.resource.default_sort),
            None => resolve_sort_pair(
                request.order_by.as_deref(),
                request.order_direction.as_deref(),
                self.resource.default_sort,
            ),
        };
        let order = with_tiebreaker(primary, self.resource.tiebreaker);

        tracing::debug!(
            clauses = predicate.clauses().len(),
            sort = %primary,
            offset = window.offset,
            limit = window.limit,
            "executing search"
        );

        let (records, rows) = tokio::try_join!(
            self.repo.count(&predicate),
            self.repo
                .fetch_page(&predicate, &order, window.offset, window.limit),
        )?;

        let max_rows = usize::try_from(window.limit).unwrap_or(usize::MAX);
        let data: Vec<T> = rows.into_iter().take(max_rows).map(self.map.as_ref()).collect();
        let pagination = Pagination::from_window(&window, records, policy.empty_pages);

        self.record_audit(&actor, &request, records).await?;

        tracing::debug!(records, returned = data.len(), "search complete");
        Ok(ResultPage::new(pagination, data))
    }

    async fn record_audit<Q: Serialize>(
        &self,
        actor: &ScopedActor,
        request: &SearchRequest<Q>,
        records: u64,
    ) -> Result<(), SearchError> {
        let Some(sink) = &self.audit else {
            return Ok(());
        };

        let outcome = match serde_json::to_value(request) {
            Ok(filter) => {
                sink.record(AuditEvent {
                    actor_id: actor.subject_id(),
                    organization_id: actor.organization_id(),
                    action: format!("{}.search", self.resource.name),
                    filter,
                    records,
                })
                .await
            }
            Err(e) => Err(AuditError(e.to_string())),
        };

        match (outcome, self.config.audit) {
            (Ok(()), _) => Ok(()),
            (Err(e), AuditPolicy::BestEffort) => {
                tracing::warn!(error = %e, "search audit failed, continuing");
                Ok(())
            }
            (Err(e), AuditPolicy::Required) => Err(e.into()),
        }
    }
}
