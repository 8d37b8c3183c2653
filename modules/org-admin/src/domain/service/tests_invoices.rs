#![allow(clippy::unwrap_used, clippy::expect_used)]

use scopekit_search::{EmptyPages, Filter, PageNumbering, SearchConfig, SearchRequest};

use crate::config::OrgAdminConfig;
use crate::domain::filters::InvoiceFilter;
use crate::test_support::{audited_service, ctx_for, day, service, service_with, world};

#[tokio::test]
async fn manager_lists_whole_organization_newest_first() {
    let w = world().await;
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), SearchRequest::new(InvoiceFilter::default()))
        .await
        .unwrap();

    assert_eq!(page.pagination.current, 1);
    assert_eq!(page.pagination.limit, 20);
    assert_eq!(page.pagination.records, 24);
    assert_eq!(page.pagination.pages, 2);
    assert_eq!(page.data.len(), 20);
    assert_eq!(page.data[0].number, "INV-0023");
    assert!(page.data.iter().all(|i| i.currency == "EUR"));
}

#[tokio::test]
async fn page_past_the_end_is_empty_but_counted() {
    let w = world().await;
    let page = service(&w)
        .search_invoices(
            &ctx_for(w.manager_a),
            SearchRequest::new(InvoiceFilter::default())
                .with_page(5)
                .with_limit(10),
        )
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.current, 5);
    assert_eq!(page.pagination.records, 24);
    assert_eq!(page.pagination.pages, 3);
}

#[tokio::test]
async fn largest_page_number_is_an_empty_page() {
    let w = world().await;
    let page = service(&w)
        .search_invoices(
            &ctx_for(w.manager_a),
            SearchRequest::new(InvoiceFilter::default()).with_page(i64::MAX),
        )
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.current, i64::MAX.unsigned_abs());
    assert_eq!(page.pagination.records, 24);
    assert_eq!(page.pagination.pages, 2);
}

#[tokio::test]
async fn zero_based_numbering_starts_at_page_zero() {
    let w = world().await;
    let svc = service_with(
        &w,
        OrgAdminConfig {
            invoices: SearchConfig {
                page_numbering: PageNumbering::ZeroBased,
                ..SearchConfig::default()
            },
            ..OrgAdminConfig::default()
        },
    );
    let ctx = ctx_for(w.manager_a);

    let first = svc
        .search_invoices(&ctx, SearchRequest::new(InvoiceFilter::default()).with_page(0).with_limit(10))
        .await
        .unwrap();
    assert_eq!(first.pagination.current, 0);
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.data[0].number, "INV-0023");

    let last = svc
        .search_invoices(&ctx, SearchRequest::new(InvoiceFilter::default()).with_page(2).with_limit(10))
        .await
        .unwrap();
    assert_eq!(last.pagination.current, 2);
    assert_eq!(last.pagination.pages, 3);
    assert_eq!(last.data.len(), 4);
    assert_eq!(last.data[3].number, "INV-0000");

    let clamped = svc
        .search_invoices(&ctx, SearchRequest::new(InvoiceFilter::default()).with_page(-3).with_limit(10))
        .await
        .unwrap();
    assert_eq!(clamped.pagination.current, 0);
    assert_eq!(clamped.data[0].id, first.data[0].id);
}

#[tokio::test]
async fn empty_result_reports_page_count_per_policy() {
    let w = world().await;
    let nothing = || InvoiceFilter {
        status: Filter::Value("refunded".to_owned()),
        ..InvoiceFilter::default()
    };
    let ctx = ctx_for(w.manager_a);

    let page = service(&w)
        .search_invoices(&ctx, SearchRequest::new(nothing()))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 0);
    assert_eq!(page.pagination.pages, 0);

    let svc = service_with(
        &w,
        OrgAdminConfig {
            invoices: SearchConfig {
                empty_pages: EmptyPages::AtLeastOne,
                ..SearchConfig::default()
            },
            ..OrgAdminConfig::default()
        },
    );
    let page = svc.search_invoices(&ctx, SearchRequest::new(nothing())).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.records, 0);
    assert_eq!(page.pagination.pages, 1);
}

#[tokio::test]
async fn paid_invoices_sorted_by_amount_descending() {
    let w = world().await;
    let filter = InvoiceFilter {
        status: Filter::Value("paid".to_owned()),
        ..InvoiceFilter::default()
    };
    let page = service(&w)
        .search_invoices(
            &ctx_for(w.manager_a),
            SearchRequest::new(filter).with_sort("amount_cents:desc"),
        )
        .await
        .unwrap();

    assert_eq!(page.pagination.records, 8);
    assert!(page.data.iter().all(|i| i.status == "paid"));
    let amounts: Vec<i64> = page.data.iter().map(|i| i.amount_cents).collect();
    assert_eq!(amounts.first(), Some(&22_000));
    assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
    assert!(page.data.iter().all(|i| i.paid_at.is_some()));
}

#[tokio::test]
async fn order_by_pair_is_accepted() {
    let w = world().await;
    let req: SearchRequest<InvoiceFilter> =
        serde_json::from_str(r#"{"orderBy": "number", "orderDirection": "ASC", "limit": 3}"#).unwrap();
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), req)
        .await
        .unwrap();
    let numbers: Vec<&str> = page.data.iter().map(|i| i.number.as_str()).collect();
    assert_eq!(numbers, vec!["INV-0000", "INV-0001", "INV-0002"]);
}

#[tokio::test]
async fn unknown_sort_field_falls_back_to_default() {
    let w = world().await;
    let svc = service(&w);
    let ctx = ctx_for(w.manager_a);

    let odd = svc
        .search_invoices(&ctx, SearchRequest::new(InvoiceFilter::default()).with_sort("owner_id; drop table invoices"))
        .await
        .unwrap();
    let default = svc
        .search_invoices(&ctx, SearchRequest::new(InvoiceFilter::default()))
        .await
        .unwrap();
    assert_eq!(odd.data, default.data);
}

#[tokio::test]
async fn null_customer_filter_selects_unassigned_invoices() {
    let w = world().await;
    let req: SearchRequest<InvoiceFilter> = serde_json::from_str(r#"{"customer_id": null}"#).unwrap();
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), req)
        .await
        .unwrap();

    assert_eq!(page.pagination.records, 6);
    let json = serde_json::to_value(&page.data[0]).unwrap();
    assert!(json["customer_id"].is_null());
    assert!(json["deleted_at"].is_null());
}

#[tokio::test]
async fn customer_value_filter_matches_exactly() {
    let w = world().await;
    let filter = InvoiceFilter {
        customer_id: Filter::Value(w.customer),
        ..InvoiceFilter::default()
    };
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), SearchRequest::new(filter))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 18);
    assert!(page.data.iter().all(|i| i.customer_id == Some(w.customer)));
}

#[tokio::test]
async fn text_range_and_membership_filters() {
    let w = world().await;
    let svc = service(&w);
    let ctx = ctx_for(w.manager_a);

    let rush = InvoiceFilter {
        memo: Filter::Value("rush".to_owned()),
        ..InvoiceFilter::default()
    };
    let page = svc.search_invoices(&ctx, SearchRequest::new(rush)).await.unwrap();
    assert_eq!(page.pagination.records, 5);

    let shouting = InvoiceFilter {
        memo: Filter::Value("RUSH".to_owned()),
        ..InvoiceFilter::default()
    };
    let page = svc.search_invoices(&ctx, SearchRequest::new(shouting)).await.unwrap();
    assert_eq!(page.pagination.records, 5);

    let statuses = InvoiceFilter {
        statuses: vec!["paid".to_owned(), "void".to_owned()],
        ..InvoiceFilter::default()
    };
    let page = svc.search_invoices(&ctx, SearchRequest::new(statuses)).await.unwrap();
    assert_eq!(page.pagination.records, 16);

    let amounts = InvoiceFilter {
        amount_min: Some(5_000),
        amount_max: Some(10_000),
        ..InvoiceFilter::default()
    };
    let page = svc.search_invoices(&ctx, SearchRequest::new(amounts)).await.unwrap();
    assert_eq!(page.pagination.records, 6);

    let window = InvoiceFilter {
        issued_from: Some(day(10)),
        issued_to: Some(day(12)),
        ..InvoiceFilter::default()
    };
    let page = svc.search_invoices(&ctx, SearchRequest::new(window)).await.unwrap();
    assert_eq!(page.pagination.records, 3);
}

#[tokio::test]
async fn blank_text_filter_is_ignored() {
    let w = world().await;
    let filter = InvoiceFilter {
        number: Filter::Value("   ".to_owned()),
        ..InvoiceFilter::default()
    };
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), SearchRequest::new(filter))
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 24);
}

#[tokio::test]
async fn timestamps_are_canonical_utc() {
    let w = world().await;
    let filter = InvoiceFilter {
        number: Filter::Value("INV-0003".to_owned()),
        ..InvoiceFilter::default()
    };
    let page = service(&w)
        .search_invoices(&ctx_for(w.manager_a), SearchRequest::new(filter))
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].issued_at, "2024-01-04T09:00:00.000Z");
    assert_eq!(page.data[0].paid_at.as_deref(), Some("2024-01-06T09:00:00.000Z"));
}

#[tokio::test]
async fn searches_are_audited() {
    let w = world().await;
    let (svc, sink) = audited_service(&w);
    let filter = InvoiceFilter {
        status: Filter::Value("draft".to_owned()),
        ..InvoiceFilter::default()
    };
    svc.search_invoices(&ctx_for(w.manager_a), SearchRequest::new(filter).with_page(2))
        .await
        .unwrap();

    let events = sink.events.lock();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, "invoices.search");
    assert_eq!(events[0].actor_id, w.manager_a);
    assert_eq!(events[0].organization_id, w.org_a);
    assert_eq!(events[0].filter, serde_json::json!({"status": "draft", "page": 2}));
}
