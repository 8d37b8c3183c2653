//! Demo data for local runs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};
use serde::Serialize;
use uuid::Uuid;

use scopekit_security::ActorRole;

use crate::infra::storage::entity::{invoice, member, org_assignment};

/// Identifiers of the seeded organizations and subjects.
#[derive(Debug, Clone, Serialize)]
pub struct DemoTenants {
    pub acme: Uuid,
    pub globex: Uuid,
    pub acme_manager: Uuid,
    pub acme_member: Uuid,
    pub globex_member: Uuid,
}

pub(crate) async fn insert_assignment(
    db: &DatabaseConnection,
    subject_id: Uuid,
    organization_id: Uuid,
    role: ActorRole,
    at: DateTime<Utc>,
) -> Result<(), DbErr> {
    org_assignment::Model {
        subject_id,
        organization_id,
        role: role.as_str().to_owned(),
        created_at: at,
    }
    .into_active_model()
    .insert(db)
    .await?;
    Ok(())
}

pub(crate) async fn insert_member(db: &DatabaseConnection, m: member::Model) -> Result<(), DbErr> {
    m.into_active_model().insert(db).await?;
    Ok(())
}

pub(crate) async fn insert_invoice(db: &DatabaseConnection, m: invoice::Model) -> Result<(), DbErr> {
    m.into_active_model().insert(db).await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn member_row(
    id: Uuid,
    organization_id: Uuid,
    email: &str,
    display_name: &str,
    role: ActorRole,
    manager_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
) -> member::Model {
    member::Model {
        id,
        organization_id,
        email: email.to_owned(),
        display_name: display_name.to_owned(),
        role: role.as_str().to_owned(),
        password_hash: format!("$argon2id$v=19$demo${id}"),
        manager_id,
        last_login_at,
        created_at,
        deleted_at: None,
    }
}

async fn seed_org_invoices(
    db: &DatabaseConnection,
    organization_id: Uuid,
    owners: &[Uuid],
    count: u32,
    base: DateTime<Utc>,
) -> Result<(), DbErr> {
    const STATUSES: [&str; 3] = ["draft", "paid", "void"];
    let customer = Uuid::new_v4();

    for i in 0..count {
        let idx = usize::try_from(i).unwrap_or_default();
        let issued_at = base + Duration::days(i64::from(i));
        let status = STATUSES.get(idx % STATUSES.len()).copied().unwrap_or("draft");
        let owner_id = owners
            .get(idx % owners.len().max(1))
            .copied()
            .unwrap_or_default();
        insert_invoice(
            db,
            invoice::Model {
                id: Uuid::new_v4(),
                organization_id,
                owner_id,
                customer_id: (i % 4 != 0).then_some(customer),
                number: format!("INV-{:04}", i + 1),
                status: status.to_owned(),
                memo: if i % 5 == 0 { "rush order" } else { "standard terms" }.to_owned(),
                amount_cents: i64::from(i + 1) * 1250,
                currency: "EUR".to_owned(),
                issued_at,
                paid_at: (status == "paid").then(|| issued_at + Duration::days(3)),
                created_at: issued_at,
                deleted_at: None,
            },
        )
        .await?;
    }
    Ok(())
}

/// Seeds two organizations with members, assignments and invoices.
///
/// # Errors
/// Returns [`DbErr`] when an insert fails.
pub async fn seed_demo(db: &DatabaseConnection) -> Result<DemoTenants, DbErr> {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default();

    let t = DemoTenants {
        acme: Uuid::new_v4(),
        globex: Uuid::new_v4(),
        acme_manager: Uuid::new_v4(),
        acme_member: Uuid::new_v4(),
        globex_member: Uuid::new_v4(),
    };

    let people = [
        (t.acme_manager, t.acme, "grace@acme.test", "Grace Hopper", ActorRole::Manager, None),
        (t.acme_member, t.acme, "alan@acme.test", "Alan Turing", ActorRole::Member, Some(t.acme_manager)),
        (t.globex_member, t.globex, "hank@globex.test", "Hank Scorpio", ActorRole::Member, None),
    ];
    for (id, org, email, name, role, manager) in people {
        insert_member(db, member_row(id, org, email, name, role, manager, base, None)).await?;
        insert_assignment(db, id, org, role, base).await?;
    }

    seed_org_invoices(db, t.acme, &[t.acme_member, t.acme_manager], 30, base).await?;
    seed_org_invoices(db, t.globex, &[t.globex_member], 5, base).await?;

    tracing::info!(acme = %t.acme, globex = %t.globex, "demo data seeded");
    Ok(t)
}
