//! Pure derivation of every tuned setting from a validated profile.
//!
//! `derive` is total over the validated input domain: it never fails, never
//! produces a negative or unbounded value, and performs no I/O. All
//! fractional results are floored or ceiled exactly as stated on each
//! field, because the outputs become literal integer settings in the
//! rendered configuration files.
//!
//! Every document is rendered from the same [`DerivedSettings`] snapshot,
//! so values that must agree across documents (the memory budget split
//! between the database buffer pool, the object cache, and the worker
//! pool) are computed once here and never re-derived downstream.

use crate::profile::{ServerProfile, StorageType};
use serde::{Deserialize, Serialize};

/// Snapshot of all computed settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSettings {
    /// Total memory budget in MB (ram_gb * 1024)
    pub memory_mb: u64,

    /// Baseline concurrent worker count, sized to fit both the CPU and the
    /// 128MB-per-worker memory envelope, never below 10
    pub worker_target: u64,
    /// Hard ceiling on pool size: floor(target * 1.5)
    pub worker_ceiling: u64,
    /// Workers started immediately: ceil(target / 4)
    pub workers_start: u64,
    /// Idle floor: ceil(target / 5)
    pub workers_min_spare: u64,
    /// Idle ceiling: ceil(target / 2)
    pub workers_max_spare: u64,

    /// Database buffer pool: 50% of the memory budget
    pub buffer_pool_mb: u64,
    /// Redo log file size: min(512, buffer_pool / 4)
    pub log_file_mb: u64,
    /// One pool instance per GB of pool, capped by core count
    pub buffer_pool_instances: u64,
    /// max(151, worker_target + 50)
    pub max_connections: u64,
    /// 0 whenever the object cache is enabled, else min(256, 5% of memory)
    pub query_cache_mb: u64,
    pub thread_cache_size: u64,
    pub table_open_cache: u64,
    pub table_definition_cache: u64,
    /// InnoDB read and write thread count: min(64, cores * 2)
    pub io_threads: u64,
    pub io_capacity: u64,
    pub io_capacity_max: u64,

    /// Object-cache memory ceiling: 15% of memory when enabled, else 0
    pub redis_max_memory_mb: u64,

    /// Edge-proxy worker processes: one per core
    pub edge_worker_processes: u64,
    /// Per-worker connection ceiling: 4096 above 50000 daily visitors
    pub edge_worker_connections: u64,

    /// kernel.shmmax: half the memory budget, in bytes
    pub shmmax_bytes: u64,
    /// kernel.shmall: shmmax in 4KB pages
    pub shmall_pages: u64,

    /// Informational: orders older than two years at the current rate
    pub archived_orders_estimate: u64,
}

/// Derive every tuned setting from an already-validated profile.
///
/// The caller owns validation; this function assumes each field is inside
/// its declared domain and is total over that domain.
pub fn derive(profile: &ServerProfile) -> DerivedSettings {
    let cores = u64::from(profile.cpu_cores);
    let memory_mb = u64::from(profile.ram_gb) * 1024;

    // Worker pool: the smaller of the CPU bound (cores * 3) and the memory
    // bound (128MB per worker), clamped to a floor of 10.
    let worker_target = (cores * 3).min(memory_mb / 128).max(10);
    let worker_ceiling = worker_target * 3 / 2;

    let buffer_pool_mb = memory_mb / 2;
    let (io_capacity, io_capacity_max) = io_throughput_hints(profile.storage_type);

    let query_cache_mb = if profile.has_redis {
        0
    } else {
        (memory_mb * 5 / 100).min(256)
    };

    let shmmax_bytes = memory_mb * 1024 * 1024 / 2;

    DerivedSettings {
        memory_mb,
        worker_target,
        worker_ceiling,
        workers_start: worker_target.div_ceil(4),
        workers_min_spare: worker_target.div_ceil(5),
        workers_max_spare: worker_target.div_ceil(2),
        buffer_pool_mb,
        log_file_mb: (buffer_pool_mb / 4).min(512),
        buffer_pool_instances: cores.min(buffer_pool_mb / 1024),
        max_connections: (worker_target + 50).max(151),
        query_cache_mb,
        thread_cache_size: (cores * 10).min(100),
        table_open_cache: (profile.avg_product_count * 4).min(4000),
        table_definition_cache: (profile.avg_product_count * 2).min(2000),
        io_threads: (cores * 2).min(64),
        io_capacity,
        io_capacity_max,
        redis_max_memory_mb: if profile.has_redis {
            memory_mb * 15 / 100
        } else {
            0
        },
        edge_worker_processes: cores,
        edge_worker_connections: if profile.expected_traffic > 50_000 {
            4096
        } else {
            2048
        },
        shmmax_bytes,
        shmall_pages: shmmax_bytes / 4096,
        archived_orders_estimate: profile.avg_orders_per_day * 365 * 2,
    }
}

/// Fixed two-tier policy table: (innodb_io_capacity, innodb_io_capacity_max)
/// per storage class. These are conventional defaults for the class, not a
/// derived quantity.
fn io_throughput_hints(storage: StorageType) -> (u64, u64) {
    if storage.is_solid_state() {
        (2000, 4000)
    } else {
        (200, 400)
    }
}
