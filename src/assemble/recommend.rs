//! The four categorized recommendation lists and their markdown digest.
//!
//! Each entry carries a required/optional flag computed from the profile:
//! a page-cache plugin is required only when no edge cache covers it, and
//! a CDN is required only above the traffic threshold.

use crate::engine::DerivedSettings;
use crate::profile::{DbEngine, ServerProfile};
use serde::{Deserialize, Serialize};

/// Daily visitors above which a CDN stops being optional.
const CDN_TRAFFIC_THRESHOLD: u64 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
    pub required: bool,
}

impl Recommendation {
    fn new(title: &str, detail: &str, required: bool) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub plugins: Vec<Recommendation>,
    pub monitoring: Vec<Recommendation>,
    pub maintenance: Vec<Recommendation>,
    pub database: Vec<Recommendation>,
}

pub fn build(profile: &ServerProfile, derived: &DerivedSettings) -> Recommendations {
    Recommendations {
        plugins: plugins(profile),
        monitoring: monitoring(),
        maintenance: maintenance(),
        database: database(profile, derived),
    }
}

fn plugins(profile: &ServerProfile) -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            "Page cache plugin",
            "Serves full pages from the FastCGI cache for anonymous visitors. Behind Varnish the edge cache already covers this.",
            !profile.has_varnish,
        ),
        Recommendation::new(
            "CDN integration",
            "Offloads static assets to edge locations close to visitors.",
            profile.expected_traffic > CDN_TRAFFIC_THRESHOLD,
        ),
        Recommendation::new(
            "Redis object-cache drop-in",
            "Connects the application object cache to the Redis instance configured in redis.conf.",
            profile.has_redis,
        ),
        Recommendation::new(
            "Image optimization plugin",
            "Recompresses uploads and serves WebP where supported.",
            false,
        ),
    ]
}

fn monitoring() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            "Netdata",
            "Low-overhead per-second host metrics for CPU, memory, disk and the service stack.",
            true,
        ),
        Recommendation::new(
            "Uptime Kuma",
            "Self-hosted uptime checks against the storefront and checkout.",
            false,
        ),
        Recommendation::new(
            "GoAccess",
            "Access-log analytics to verify the traffic assumptions behind this plan.",
            false,
        ),
    ]
}

fn maintenance() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            "Verify backups weekly",
            "Restore one backup to a scratch host and confirm the site boots.",
            true,
        ),
        Recommendation::new(
            "Rotate server logs",
            "Keep nginx, PHP-FPM and database logs under logrotate with a 14-day window.",
            true,
        ),
        Recommendation::new(
            "Review pending updates weekly",
            "Core, plugin and theme updates; apply on a staging copy first.",
            false,
        ),
        Recommendation::new(
            "Prune expired transients",
            "Expired transients accumulate in the options table and bloat the autoload set.",
            false,
        ),
    ]
}

fn database(profile: &ServerProfile, derived: &DerivedSettings) -> Vec<Recommendation> {
    let mut recs = vec![Recommendation::new(
        &format!(
            "Archive orders older than two years (~{} orders at the current rate)",
            derived.archived_orders_estimate
        ),
        "Move completed orders out of the hot tables to keep order queries fast.",
        false,
    )];

    match profile.db_engine {
        DbEngine::Mariadb => recs.push(Recommendation::new(
            "Enable the MariaDB thread pool",
            "thread_handling = pool-of-threads keeps connection bursts from exhausting worker threads.",
            false,
        )),
        DbEngine::Mysql => recs.push(Recommendation::new(
            "Keep the InnoDB redo log sized for write bursts",
            "Watch Innodb_log_waits; raise innodb_log_file_size if it climbs during sales.",
            false,
        )),
    }

    recs.push(Recommendation::new(
        "Optimize postmeta and options monthly",
        "OPTIMIZE TABLE on wp_postmeta and wp_options reclaims space after catalog churn.",
        false,
    ));
    recs.push(Recommendation::new(
        "Review the slow query log weekly",
        "long_query_time is set to 2s; recurring entries usually point at missing indexes.",
        false,
    ));

    recs
}

/// Render the four lists as a markdown digest with required/optional
/// markers.
pub fn render_digest(recommendations: &Recommendations) -> String {
    let mut out = String::from("# Operational recommendations\n");

    let sections = [
        ("Plugins", &recommendations.plugins),
        ("Monitoring", &recommendations.monitoring),
        ("Maintenance", &recommendations.maintenance),
        ("Database", &recommendations.database),
    ];

    for (heading, entries) in sections {
        out.push_str(&format!("\n## {heading}\n\n"));
        for entry in entries {
            let flag = if entry.required { "required" } else { "optional" };
            out.push_str(&format!("- [{flag}] {}: {}\n", entry.title, entry.detail));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive;
    use crate::profile::StorageType;

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

    fn find<'a>(entries: &'a [Recommendation], title_prefix: &str) -> &'a Recommendation {
        entries
            .iter()
            .find(|r| r.title.starts_with(title_prefix))
            .unwrap()
    }

    #[test]
    fn test_page_cache_plugin_required_without_edge_cache() {
        let p = profile();
        let recs = build(&p, &derive(&p));
        assert!(find(&recs.plugins, "Page cache plugin").required);

        let mut edge = profile();
        edge.has_varnish = true;
        let recs = build(&edge, &derive(&edge));
        assert!(!find(&recs.plugins, "Page cache plugin").required);
    }

    #[test]
    fn test_cdn_required_only_above_traffic_threshold() {
        let mut at = profile();
        at.expected_traffic = 50_000;
        let recs = build(&at, &derive(&at));
        assert!(!find(&recs.plugins, "CDN integration").required);

        let mut above = profile();
        above.expected_traffic = 50_001;
        let recs = build(&above, &derive(&above));
        assert!(find(&recs.plugins, "CDN integration").required);
    }

    #[test]
    fn test_archive_figure_embeds_order_estimate() {
        let p = profile();
        let recs = build(&p, &derive(&p));
        let archive = find(&recs.database, "Archive orders");
        assert!(archive.title.contains("~73000 orders"));
    }

    #[test]
    fn test_engine_specific_tip_switches_with_engine() {
        let p = profile();
        let recs = build(&p, &derive(&p));
        assert!(recs.database.iter().any(|r| r.title.contains("InnoDB redo log")));

        let mut maria = profile();
        maria.db_engine = DbEngine::Mariadb;
        let recs = build(&maria, &derive(&maria));
        assert!(recs.database.iter().any(|r| r.title.contains("thread pool")));
    }

    #[test]
    fn test_digest_marks_required_and_optional() {
        let p = profile();
        let digest = render_digest(&build(&p, &derive(&p)));
        assert!(digest.contains("# Operational recommendations"));
        assert!(digest.contains("## Plugins"));
        assert!(digest.contains("- [required] Page cache plugin"));
        assert!(digest.contains("- [optional] Image optimization plugin"));
    }
}
