use serde::{Deserialize, Serialize};

use scopekit_search::SearchConfig;

/// Search settings per resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrgAdminConfig {
    pub invoices: SearchConfig,
    pub members: SearchConfig,
}
