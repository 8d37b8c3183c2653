//! `scopekit`: run tenant-scoped searches against an org-admin database.

mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde::Serialize;
use uuid::Uuid;

use org_admin::demo::seed_demo;
use org_admin::{InvoiceFilter, MemberFilter, Migrator, OrgAdminService};
use scopekit_errors::Problem;
use scopekit_search::{SearchError, SearchRequest, TracingAuditSink};
use scopekit_security::SecurityContext;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "scopekit", version, about = "Tenant-scoped search over org-admin data")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Migrate, then insert two demo organizations
    SeedDemo,
    /// Print the effective configuration as JSON
    PrintConfig,
    /// Run one search and print the result page as JSON
    Search {
        #[arg(value_enum)]
        resource: Resource,

        /// Calling subject. Defaults to the demo manager with `--demo`.
        #[arg(long)]
        subject: Option<Uuid>,

        /// Request body, e.g. '{"status":"paid","page":2,"sort":"-amount_cents"}'
        #[arg(long, default_value = "{}")]
        query: String,

        /// Migrate and seed demo data before searching
        #[arg(long)]
        demo: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Resource {
    Invoices,
    Members,
}

impl Resource {
    fn path(self) -> &'static str {
        match self {
            Resource::Invoices => "/invoices/search",
            Resource::Members => "/members/search",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::PrintConfig => print_json(&config),
        Commands::Migrate => {
            let db = open(&config).await?;
            Migrator::up(&db, None).await.context("migration failed")?;
            tracing::info!("migrations applied");
            Ok(())
        }
        Commands::SeedDemo => {
            let db = open(&config).await?;
            Migrator::up(&db, None).await.context("migration failed")?;
            let tenants = seed_demo(&db).await.context("seeding failed")?;
            print_json(&tenants)
        }
        Commands::Search {
            resource,
            subject,
            query,
            demo,
        } => {
            let db = open(&config).await?;
            let mut subject = subject;
            if demo {
                Migrator::up(&db, None).await.context("migration failed")?;
                let tenants = seed_demo(&db).await.context("seeding failed")?;
                subject = subject.or(Some(tenants.acme_manager));
            }
            let ctx = subject.map_or_else(SecurityContext::anonymous, SecurityContext::for_subject);

            let service =
                OrgAdminService::from_db(db, config.org_admin).with_audit(Arc::new(TracingAuditSink));
            run_search(&service, &ctx, resource, &query).await
        }
    }
}

async fn open(config: &AppConfig) -> Result<DatabaseConnection> {
    scopekit_db::connect(&config.database)
        .await
        .with_context(|| format!("cannot connect to {}", config.database.redacted_dsn()))
}

async fn run_search(service: &OrgAdminService, ctx: &SecurityContext, resource: Resource, query: &str) -> Result<()> {
    let outcome = match resource {
        Resource::Invoices => {
            let request: SearchRequest<InvoiceFilter> = serde_json::from_str(query).context("invalid --query")?;
            service.search_invoices(ctx, request).await.map(serde_json::to_value)
        }
        Resource::Members => {
            let request: SearchRequest<MemberFilter> = serde_json::from_str(query).context("invalid --query")?;
            service.search_members(ctx, request).await.map(serde_json::to_value)
        }
    };

    match outcome {
        Ok(page) => print_json(&page?),
        Err(err) => {
            let problem = problem_for(resource, err);
            print_json(&problem)?;
            anyhow::bail!("search failed: {} ({})", problem.title, problem.status)
        }
    }
}

fn problem_for(resource: Resource, err: SearchError) -> Problem {
    Problem::from(err).with_instance(resource.path())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
