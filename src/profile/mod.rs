//! The validated input record describing the target server.
//!
//! A [`ServerProfile`] is collected and validated at the boundary; the
//! derivation engine and document assembler assume every field is already
//! inside its declared domain and never re-validate.

use serde::{Deserialize, Serialize};

pub mod loader;
pub mod validator;

pub use loader::ProfileLoader;
pub use validator::{ProfileValidator, SUPPORTED_PHP_VERSIONS};

/// Hardware and workload parameters for one server.
///
/// Immutable once handed to the engine; both core functions borrow it and
/// never mutate caller-owned data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerProfile {
    /// Physical/virtual CPU cores (1-128)
    pub cpu_cores: u32,
    /// Installed memory in GB (2-512)
    pub ram_gb: u32,
    pub storage_type: StorageType,
    /// Daily unique visitors (>= 100)
    pub expected_traffic: u64,
    /// PHP runtime version, e.g. "8.2"
    pub php_version: String,
    pub db_engine: DbEngine,
    /// Redis object cache enabled
    pub has_redis: bool,
    /// Varnish edge cache in front of the web server
    pub has_varnish: bool,
    /// Catalog size (>= 10)
    pub avg_product_count: u64,
    /// Order volume (>= 1)
    pub avg_orders_per_day: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Ssd,
    Nvme,
    Hdd,
}

impl StorageType {
    pub fn is_solid_state(self) -> bool {
        matches!(self, StorageType::Ssd | StorageType::Nvme)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StorageType::Ssd => "ssd",
            StorageType::Nvme => "nvme",
            StorageType::Hdd => "hdd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbEngine {
    Mysql,
    Mariadb,
}

impl DbEngine {
    /// MySQL 8.0 removed the query cache; MariaDB still ships it.
    pub fn supports_query_cache(self) -> bool {
        matches!(self, DbEngine::Mariadb)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DbEngine::Mysql => "mysql",
            DbEngine::Mariadb => "mariadb",
        }
    }
}
