#![allow(clippy::unwrap_used, clippy::expect_used)]

use scopekit_search::{Filter, SearchRequest};

use crate::domain::filters::MemberFilter;
use crate::test_support::{ctx_for, service, world};

#[tokio::test]
async fn members_sorted_by_display_name_by_default() {
    let w = world().await;
    let page = service(&w)
        .search_members(&ctx_for(w.member_a), SearchRequest::new(MemberFilter::default()))
        .await
        .unwrap();
    let names: Vec<&str> = page.data.iter().map(|m| m.display_name.as_str()).collect();
    assert_eq!(names, vec!["Alan Turing", "Grace Hopper"]);
    assert_eq!(page.pagination.pages, 1);
}

#[tokio::test]
async fn summaries_never_expose_credentials() {
    let w = world().await;
    let page = service(&w)
        .search_members(&ctx_for(w.manager_a), SearchRequest::new(MemberFilter::default()))
        .await
        .unwrap();
    let json = serde_json::to_string(&page).unwrap();
    assert!(!json.contains("password_hash"));
    assert!(!json.contains("argon2id"));
}

#[tokio::test]
async fn missing_references_and_timestamps_are_null() {
    let w = world().await;
    let page = service(&w)
        .search_members(&ctx_for(w.manager_a), SearchRequest::new(MemberFilter::default()))
        .await
        .unwrap();
    let json = serde_json::to_value(&page).unwrap();
    let alan = &json["data"][0];
    let grace = &json["data"][1];

    assert_eq!(alan["manager_id"], serde_json::json!(w.manager_a));
    assert!(alan["last_login_at"].is_null());
    assert!(grace["manager_id"].is_null());
    assert_eq!(grace["last_login_at"], "2024-01-31T09:00:00.000Z");
}

#[tokio::test]
async fn null_manager_filter_finds_top_level_members() {
    let w = world().await;
    let req: SearchRequest<MemberFilter> = serde_json::from_str(r#"{"manager_id": null}"#).unwrap();
    let page = service(&w)
        .search_members(&ctx_for(w.manager_a), req)
        .await
        .unwrap();
    assert_eq!(page.pagination.records, 1);
    assert_eq!(page.data[0].id, w.manager_a);
}

#[tokio::test]
async fn name_contains_email_exact_and_role_case_insensitive() {
    let w = world().await;
    let svc = service(&w);
    let ctx = ctx_for(w.manager_a);

    let by_name = MemberFilter {
        display_name: Filter::Value("Tur".to_owned()),
        ..MemberFilter::default()
    };
    let page = svc.search_members(&ctx, SearchRequest::new(by_name)).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, w.member_a);

    let shouted_name = MemberFilter {
        display_name: Filter::Value("ALAN".to_owned()),
        ..MemberFilter::default()
    };
    let page = svc.search_members(&ctx, SearchRequest::new(shouted_name)).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, w.member_a);

    let partial_email = MemberFilter {
        email: Filter::Value("alan".to_owned()),
        ..MemberFilter::default()
    };
    let page = svc.search_members(&ctx, SearchRequest::new(partial_email)).await.unwrap();
    assert!(page.data.is_empty());

    let by_role = MemberFilter {
        role: Filter::Value("MANAGER".to_owned()),
        ..MemberFilter::default()
    };
    let page = svc.search_members(&ctx, SearchRequest::new(by_role)).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, w.manager_a);
}

#[tokio::test]
async fn deleted_members_are_opt_in_and_sort_is_honored() {
    let w = world().await;
    let page = service(&w)
        .search_members(
            &ctx_for(w.manager_a),
            SearchRequest::new(MemberFilter::default())
                .including_deleted()
                .with_sort("-created_at"),
        )
        .await
        .unwrap();
    let names: Vec<&str> = page.data.iter().map(|m| m.display_name.as_str()).collect();
    assert_eq!(names, vec!["Ada Gone", "Alan Turing", "Grace Hopper"]);
}
