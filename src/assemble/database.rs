//! Database document (`my.cnf` for MySQL or MariaDB).
//!
//! The query-cache block is emitted only for the engine that still ships a
//! query cache (MariaDB) and only when no external object cache makes it
//! redundant; in every other case a comment states why it is absent.

use super::Document;
use crate::engine::DerivedSettings;
use crate::profile::ServerProfile;

pub fn render(profile: &ServerProfile, derived: &DerivedSettings) -> Document {
    let query_cache_block = if profile.db_engine.supports_query_cache() && !profile.has_redis {
        format!(
            "query_cache_type = 1\nquery_cache_size = {}M\nquery_cache_limit = 2M",
            derived.query_cache_mb
        )
    } else if profile.has_redis {
        "# Query cache left off: Redis serves as the object cache.".to_string()
    } else {
        "# Query cache not configured: MySQL 8.0 removed it.".to_string()
    };

    let body = format!(
        r#"# my.cnf - {engine} tuning
# generated by stacktune

[mysqld]
innodb_buffer_pool_size = {buffer_pool}M
innodb_buffer_pool_instances = {instances}
innodb_log_file_size = {log_file}M
innodb_flush_log_at_trx_commit = 2
innodb_flush_method = O_DIRECT
innodb_read_io_threads = {io_threads}
innodb_write_io_threads = {io_threads}
innodb_io_capacity = {io_capacity}
innodb_io_capacity_max = {io_capacity_max}

max_connections = {max_connections}
thread_cache_size = {thread_cache}
table_open_cache = {table_open_cache}
table_definition_cache = {table_definition_cache}

{query_cache_block}

slow_query_log = 1
slow_query_log_file = /var/log/mysql/slow.log
long_query_time = 2
"#,
        engine = profile.db_engine.as_str(),
        buffer_pool = derived.buffer_pool_mb,
        instances = derived.buffer_pool_instances,
        log_file = derived.log_file_mb,
        io_threads = derived.io_threads,
        io_capacity = derived.io_capacity,
        io_capacity_max = derived.io_capacity_max,
        max_connections = derived.max_connections,
        thread_cache = derived.thread_cache_size,
        table_open_cache = derived.table_open_cache,
        table_definition_cache = derived.table_definition_cache,
        query_cache_block = query_cache_block,
    );

    Document::new("database", "my.cnf", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive;
    use crate::profile::{DbEngine, StorageType};

    fn profile(db_engine: DbEngine, has_redis: bool) -> ServerProfile {
        ServerProfile {
            cpu_cores: 4,
            ram_gb: 8,
            storage_type: StorageType::Ssd,
            expected_traffic: 10_000,
            php_version: "8.2".to_string(),
            db_engine,
            has_redis,
            has_varnish: false,
            avg_product_count: 1000,
            avg_orders_per_day: 100,
        }
    }

    #[test]
    fn test_sizing_lines_from_derived_snapshot() {
        let p = profile(DbEngine::Mysql, true);
        let doc = render(&p, &derive(&p));

        assert_eq!(doc.filename, "my.cnf");
        assert!(doc.body.contains("innodb_buffer_pool_size = 4096M"));
        assert!(doc.body.contains("innodb_buffer_pool_instances = 4"));
        assert!(doc.body.contains("innodb_log_file_size = 512M"));
        assert!(doc.body.contains("max_connections = 151"));
        assert!(doc.body.contains("innodb_io_capacity = 2000"));
        assert!(doc.body.contains("innodb_io_capacity_max = 4000"));
    }

    #[test]
    fn test_hdd_io_hints() {
        let mut p = profile(DbEngine::Mysql, true);
        p.storage_type = StorageType::Hdd;
        let doc = render(&p, &derive(&p));
        assert!(doc.body.contains("innodb_io_capacity = 200"));
        assert!(doc.body.contains("innodb_io_capacity_max = 400"));
    }

    #[test]
    fn test_query_cache_block_for_mariadb_without_redis() {
        let p = profile(DbEngine::Mariadb, false);
        let doc = render(&p, &derive(&p));
        assert!(doc.body.contains("query_cache_type = 1"));
        assert!(doc.body.contains("query_cache_size = 256M"));
    }

    #[test]
    fn test_query_cache_comment_when_redis_active() {
        let p = profile(DbEngine::Mariadb, true);
        let doc = render(&p, &derive(&p));
        assert!(!doc.body.contains("query_cache_type"));
        assert!(doc
            .body
            .contains("# Query cache left off: Redis serves as the object cache."));
    }

    #[test]
    fn test_query_cache_comment_for_mysql() {
        let p = profile(DbEngine::Mysql, false);
        let doc = render(&p, &derive(&p));
        assert!(!doc.body.contains("query_cache_type"));
        assert!(doc
            .body
            .contains("# Query cache not configured: MySQL 8.0 removed it."));
    }

    #[test]
    fn test_header_names_the_engine() {
        let p = profile(DbEngine::Mariadb, true);
        let doc = render(&p, &derive(&p));
        assert!(doc.body.contains("# my.cnf - mariadb tuning"));
    }
}
