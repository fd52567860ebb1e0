pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use crate::errors::AppResult;
use pool::DbPool;

/// Open the store the way every command does: connect, then make sure the
/// schema exists. Safe to call on every operation; schema creation is
/// idempotent.
pub fn open_store(db_path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(db_path)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
