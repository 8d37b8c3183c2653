#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use scopekit_search::{AuditError, AuditEvent, AuditSink};
use scopekit_security::{ActorRole, SecurityContext};

use crate::config::OrgAdminConfig;
use crate::demo::{insert_assignment, insert_invoice, insert_member, member_row};
use crate::domain::service::OrgAdminService;
use crate::infra::storage::entity::{invoice, member};

pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    crate::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

#[must_use]
pub fn ctx_for(subject_id: Uuid) -> SecurityContext {
    SecurityContext::builder()
        .subject_id(subject_id)
        .subject_type("user")
        .build()
}

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::days(n)
}

/// Two organizations.
///
/// Org A: a manager, a member and a soft-deleted member; 25 invoices of
/// which the last is soft-deleted. Even invoices belong to the member, odd
/// ones to the manager. Org B: one member with 6 invoices.
pub struct World {
    pub db: DatabaseConnection,
    pub org_a: Uuid,
    pub org_b: Uuid,
    pub manager_a: Uuid,
    pub member_a: Uuid,
    pub member_b: Uuid,
    pub customer: Uuid,
}

pub async fn world() -> World {
    let db = inmem_db().await;
    let w = World {
        db,
        org_a: Uuid::new_v4(),
        org_b: Uuid::new_v4(),
        manager_a: Uuid::new_v4(),
        member_a: Uuid::new_v4(),
        member_b: Uuid::new_v4(),
        customer: Uuid::new_v4(),
    };

    insert_member(
        &w.db,
        member_row(w.manager_a, w.org_a, "grace@a.test", "Grace Hopper", ActorRole::Manager, None, day(0), Some(day(30))),
    )
    .await
    .unwrap();
    insert_member(
        &w.db,
        member_row(w.member_a, w.org_a, "alan@a.test", "Alan Turing", ActorRole::Member, Some(w.manager_a), day(1), None),
    )
    .await
    .unwrap();
    insert_member(
        &w.db,
        member::Model {
            deleted_at: Some(day(5)),
            ..member_row(Uuid::new_v4(), w.org_a, "gone@a.test", "Ada Gone", ActorRole::Member, None, day(2), None)
        },
    )
    .await
    .unwrap();
    insert_member(
        &w.db,
        member_row(w.member_b, w.org_b, "hank@b.test", "Hank Scorpio", ActorRole::Member, None, day(0), None),
    )
    .await
    .unwrap();

    insert_assignment(&w.db, w.manager_a, w.org_a, ActorRole::Manager, day(0)).await.unwrap();
    insert_assignment(&w.db, w.member_a, w.org_a, ActorRole::Member, day(0)).await.unwrap();
    insert_assignment(&w.db, w.member_b, w.org_b, ActorRole::Member, day(0)).await.unwrap();

    for i in 0..25_i64 {
        let status = match i % 3 {
            0 => "paid",
            1 => "draft",
            _ => "void",
        };
        insert_invoice(
            &w.db,
            invoice::Model {
                id: Uuid::new_v4(),
                organization_id: w.org_a,
                owner_id: if i % 2 == 0 { w.member_a } else { w.manager_a },
                customer_id: if i % 4 == 0 { None } else { Some(w.customer) },
                number: format!("INV-{i:04}"),
                status: status.to_owned(),
                memo: if i % 5 == 0 { "rush order" } else { "standard" }.to_owned(),
                amount_cents: (i + 1) * 1000,
                currency: "EUR".to_owned(),
                issued_at: day(i),
                paid_at: (status == "paid").then(|| day(i + 2)),
                created_at: day(i),
                deleted_at: (i == 24).then(|| day(40)),
            },
        )
        .await
        .unwrap();
    }

    for i in 0..6_i64 {
        insert_invoice(
            &w.db,
            invoice::Model {
                id: Uuid::new_v4(),
                organization_id: w.org_b,
                owner_id: w.member_b,
                customer_id: None,
                number: format!("B-{i:04}"),
                status: "paid".to_owned(),
                memo: "rush order".to_owned(),
                amount_cents: 999_999,
                currency: "USD".to_owned(),
                issued_at: day(i),
                paid_at: Some(day(i + 1)),
                created_at: day(i),
                deleted_at: None,
            },
        )
        .await
        .unwrap();
    }

    w
}

pub fn service(w: &World) -> OrgAdminService {
    service_with(w, OrgAdminConfig::default())
}

pub fn service_with(w: &World, config: OrgAdminConfig) -> OrgAdminService {
    OrgAdminService::from_db(w.db.clone(), config)
}

#[derive(Default)]
pub struct RecordingAudit {
    pub events: Mutex<Vec<AuditEvent>>,
}

#[async_trait::async_trait]
impl AuditSink for RecordingAudit {
    async fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        self.events.lock().push(event);
        Ok(())
    }
}

pub fn audited_service(w: &World) -> (OrgAdminService, Arc<RecordingAudit>) {
    let sink = Arc::new(RecordingAudit::default());
    (service(w).with_audit(sink.clone()), sink)
}
