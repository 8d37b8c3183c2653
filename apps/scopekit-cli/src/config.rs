use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use org_admin::OrgAdminConfig;
use scopekit_db::DbConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub database: DbConfig,
    pub org_admin: OrgAdminConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file, then `SCOPEKIT__*`
    /// environment variables (`SCOPEKIT__DATABASE__DSN` sets `database.dsn`).
    ///
    /// # Errors
    /// Fails when the file is missing or a layer does not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("SCOPEKIT__").split("__"));

        figment.extract().context("invalid configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    use scopekit_search::{AuditPolicy, InvalidPaging};

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.database.dsn, "sqlite::memory:");
        assert_eq!(cfg.org_admin.invoices.default_limit, 20);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r"
database:
  dsn: sqlite://scopekit.db?mode=rwc
  connect_timeout: 2s
org_admin:
  invoices:
    max_limit: 25
    invalid_paging: reject
    audit: required
logging:
  json: true
"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.database.dsn, "sqlite://scopekit.db?mode=rwc");
        assert_eq!(cfg.database.connect_timeout, Some(std::time::Duration::from_secs(2)));
        assert_eq!(cfg.org_admin.invoices.max_limit, 25);
        assert_eq!(cfg.org_admin.invoices.invalid_paging, InvalidPaging::Reject);
        assert_eq!(cfg.org_admin.invoices.audit, AuditPolicy::Required);
        assert_eq!(cfg.org_admin.members.max_limit, 100);
        assert!(cfg.logging.json);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "databse:\n  dsn: x").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
