//! Object-cache document (`redis.conf`).
//!
//! Only rendered when the profile enables Redis; the assembler leaves the
//! slot empty otherwise.

use super::Document;
use crate::engine::DerivedSettings;

pub fn render(derived: &DerivedSettings) -> Document {
    let body = format!(
        r#"# redis.conf - object cache
# generated by stacktune

maxmemory {max_memory}mb
maxmemory-policy allkeys-lru

# cache only, no persistence
save ""
appendonly no

tcp-backlog 511
tcp-keepalive 300
timeout 0
databases 2
"#,
        max_memory = derived.redis_max_memory_mb,
    );

    Document::new("object-cache", "redis.conf", body)
}
