//! Document assembly: render each configuration document from one derived
//! snapshot and collect the categorized recommendation lists.
//!
//! Every document has its own pure rendering function in a submodule, so
//! each can be unit-tested without building the full output record. The
//! object-cache document is an explicit optional slot: when Redis is
//! disabled the slot is `None`, never an empty document.

use crate::engine::DerivedSettings;
use crate::profile::ServerProfile;
use serde::{Deserialize, Serialize};

pub mod database;
pub mod nginx;
pub mod php;
pub mod phpfpm;
pub mod recommend;
pub mod redis;
pub mod sysctl;
pub mod wpconfig;

pub use recommend::{Recommendation, Recommendations};

/// Document names and suggested filenames, in output order.
///
/// The object-cache entry is only present in a [`DocumentSet`] when the
/// profile enables Redis.
pub const DOCUMENT_NAMES: &[(&str, &str)] = &[
    ("nginx-main", "nginx.conf"),
    ("nginx-vhost", "site.conf"),
    ("fpm-pool", "www.conf"),
    ("php-ini", "php.ini"),
    ("database", "my.cnf"),
    ("object-cache", "redis.conf"),
    ("sysctl", "sysctl.conf"),
    ("app-overlay", "wp-config-snippet.php"),
];

/// One rendered configuration document with its suggested filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub filename: String,
    pub body: String,
}

impl Document {
    fn new(name: &str, filename: &str, body: String) -> Self {
        Self {
            name: name.to_string(),
            filename: filename.to_string(),
            body,
        }
    }
}

/// The full set of rendered documents for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub edge_main: Document,
    pub edge_vhost: Document,
    pub fpm_pool: Document,
    pub php_runtime: Document,
    pub database: Document,
    /// Absent entirely when the object cache is disabled
    pub object_cache: Option<Document>,
    pub kernel: Document,
    pub app_overlay: Document,
}

impl DocumentSet {
    /// Iterate over the produced documents in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        [
            &self.edge_main,
            &self.edge_vhost,
            &self.fpm_pool,
            &self.php_runtime,
            &self.database,
        ]
        .into_iter()
        .chain(self.object_cache.as_ref())
        .chain([&self.kernel, &self.app_overlay])
    }

    /// Look up one document by name; shares the full-set render path, so
    /// the body is byte-identical to the full-set output.
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.iter().find(|doc| doc.name == name)
    }
}

/// The output record: documents plus recommendation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningPlan {
    pub documents: DocumentSet,
    pub recommendations: Recommendations,
}

impl TuningPlan {
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }
}

/// Assemble every document and recommendation list from one derived
/// snapshot. Pure and deterministic; same inputs yield byte-identical
/// output.
pub fn assemble(profile: &ServerProfile, derived: &DerivedSettings) -> TuningPlan {
    TuningPlan {
        documents: DocumentSet {
            edge_main: nginx::render_main(profile, derived),
            edge_vhost: nginx::render_vhost(profile),
            fpm_pool: phpfpm::render(profile, derived),
            php_runtime: php::render(profile),
            database: database::render(profile, derived),
            object_cache: profile.has_redis.then(|| redis::render(derived)),
            kernel: sysctl::render(derived),
            app_overlay: wpconfig::render(profile),
        },
        recommendations: recommend::build(profile, derived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive;
    use crate::profile::{DbEngine, StorageType};

    fn profile() -> ServerProfile {
        ServerProfile {
            cpu_cores: 4,
            ram_gb: 8,
            storage_type: StorageType::Ssd,
            expected_traffic: 10_000,
            php_version: "8.2".to_string(),
            db_engine: DbEngine::Mysql,
            has_redis: true,
            has_varnish: false,
            avg_product_count: 1000,
            avg_orders_per_day: 100,
        }
    }

    #[test]
    fn test_full_set_has_eight_documents_with_redis() {
        let p = profile();
        let plan = assemble(&p, &derive(&p));
        assert_eq!(plan.documents.iter().count(), 8);
        assert!(plan.documents.object_cache.is_some());
    }

    #[test]
    fn test_object_cache_slot_absent_without_redis() {
        let mut p = profile();
        p.has_redis = false;
        let plan = assemble(&p, &derive(&p));
        assert_eq!(plan.documents.iter().count(), 7);
        assert!(plan.documents.object_cache.is_none());
        assert!(plan.document("object-cache").is_none());
    }

    #[test]
    fn test_document_lookup_matches_iteration() {
        let p = profile();
        let plan = assemble(&p, &derive(&p));
        for doc in plan.documents.iter() {
            assert_eq!(plan.document(&doc.name), Some(doc));
        }
        assert!(plan.document("no-such-document").is_none());
    }

    #[test]
    fn test_filenames_follow_the_registry() {
        let p = profile();
        let plan = assemble(&p, &derive(&p));
        for doc in plan.documents.iter() {
            let registered = DOCUMENT_NAMES
                .iter()
                .find(|(name, _)| *name == doc.name)
                .map(|(_, filename)| *filename);
            assert_eq!(registered, Some(doc.filename.as_str()));
        }
    }
}
