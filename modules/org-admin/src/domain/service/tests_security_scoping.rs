#![allow(clippy::unwrap_used, clippy::expect_used)]

use uuid::Uuid;

use scopekit_search::{Filter, SearchError, SearchRequest};
use scopekit_security::{ScopeResolutionError, SecurityContext};

use crate::domain::filters::{InvoiceFilter, MemberFilter};
use crate::test_support::{ctx_for, service, world};

#[tokio::test]
async fn members_only_see_invoices_they_own() {
    let w = world().await;
    let page = service(&w)
        .search_invoices(
            &ctx_for(w.member_a),
            SearchRequest::new(InvoiceFilter::default()).with_limit(100),
        )
        .await
        .unwrap();

    assert_eq!(page.pagination.records, 12);
    assert!(page.data.iter().all(|i| i.owner_id == w.member_a));
}

#[tokio::test]
async fn owner_filter_cannot_widen_member_scope() {
    let w = world().await;
    let filter = InvoiceFilter {
        owner_id: Filter::Value(w.manager_a),
        ..InvoiceFilter::default()
    };
    let page = service(&w)
        .search_invoices(&ctx_for(w.member_a), SearchRequest::new(filter))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 0);
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn tenants_are_isolated() {
    let w = world().await;
    let svc = service(&w);

    let page = svc
        .search_invoices(&ctx_for(w.member_b), SearchRequest::new(InvoiceFilter::default()))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 6);
    assert!(page.data.iter().all(|i| i.number.starts_with("B-")));

    let page = svc
        .search_members(&ctx_for(w.member_b), SearchRequest::new(MemberFilter::default()))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 1);
    assert_eq!(page.data[0].id, w.member_b);
}

#[tokio::test]
async fn foreign_organization_filter_is_forbidden() {
    let w = world().await;
    let svc = service(&w);

    let filter = InvoiceFilter {
        organization_id: Some(w.org_b),
        ..InvoiceFilter::default()
    };
    let err = svc
        .search_invoices(&ctx_for(w.manager_a), SearchRequest::new(filter))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Authorization(_)));

    let filter = MemberFilter {
        organization_id: Some(w.org_b),
        ..MemberFilter::default()
    };
    let err = svc
        .search_members(&ctx_for(w.manager_a), SearchRequest::new(filter))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Authorization(_)));
}

#[tokio::test]
async fn own_organization_filter_is_redundant_but_allowed() {
    let w = world().await;
    let filter = InvoiceFilter {
        organization_id: Some(w.org_a),
        ..InvoiceFilter::default()
    };
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), SearchRequest::new(filter))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 24);
}

#[tokio::test]
async fn anonymous_caller_is_unauthenticated() {
    let w = world().await;
    let err = service(&w)
        .search_invoices(&SecurityContext::anonymous(), SearchRequest::new(InvoiceFilter::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Scope(ScopeResolutionError::Unauthenticated)));
}

#[tokio::test]
async fn unassigned_caller_gets_no_scope_rather_than_empty_page() {
    let w = world().await;
    let err = service(&w)
        .search_members(&ctx_for(Uuid::new_v4()), SearchRequest::new(MemberFilter::default()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::Scope(ScopeResolutionError::MissingBinding { .. })
    ));
}

#[tokio::test]
async fn soft_deleted_rows_are_hidden_unless_requested() {
    let w = world().await;
    let svc = service(&w);
    let ctx = ctx_for(w.manager_a);

    let page = svc
        .search_invoices(&ctx, SearchRequest::new(InvoiceFilter::default()).including_deleted())
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 25);
    assert_eq!(page.data[0].deleted_at.as_deref(), Some("2024-02-10T09:00:00.000Z"));

    let page = svc
        .search_members(&ctx, SearchRequest::new(MemberFilter::default()))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 2);
}
