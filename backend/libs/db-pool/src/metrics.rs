//! Prometheus metrics for the database connection pool
//!
//! Tracks pool size by connection state.

use prometheus::{register_int_gauge_vec, IntGaugeVec};
use sqlx::PgPool;

lazy_static::lazy_static! {
    /// Database connection pool size by state (idle/active/max)
    static ref DB_POOL_CONNECTIONS: IntGaugeVec = register_int_gauge_vec!(
        "db_pool_connections",
        "Database pool connection count by state",
        &["state"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

/// Update connection pool metrics (called periodically)
pub(crate) fn update_pool_metrics(pool: &PgPool) {
    let size = pool.size() as i64;
    let idle = pool.num_idle() as i64;
    let active = size - idle;

    DB_POOL_CONNECTIONS.with_label_values(&["idle"]).set(idle);

    DB_POOL_CONNECTIONS
        .with_label_values(&["active"])
        .set(active);

    DB_POOL_CONNECTIONS
        .with_label_values(&["max"])
        .set(pool.options().get_max_connections() as i64);
}
