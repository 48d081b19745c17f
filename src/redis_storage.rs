use crate::error::{FilterError, Result};
use crate::storage::FieldStorage;
use redis::{Client, Commands, Connection};
use std::sync::Mutex;
use tracing::debug;

/// Redis storage backend. Structures map to Redis hashes: `read_field`
/// is `HGET structure field`, `write_field` is `HSET` followed by an
/// `EXPIRE` on the hash when the expiry hint is nonzero. Redis expires
/// whole keys, so expiration applies at structure granularity, refreshed
/// on every write.
pub struct RedisStorage {
    conn: Mutex<Connection>,
}

impl RedisStorage {
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)?;
        let conn = client.get_connection()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            FilterError::StorageError(format!("Redis lock error: {e}"))
        })
    }
}

impl FieldStorage for RedisStorage {
    fn read_field(
        &self,
        structure: &str,
        field: &str,
    ) -> Result<Option<Vec<u8>>> {
        let mut conn = self.lock_conn()?;
        // HGET returns nil for a missing field, surfaced here as None.
        let value: Option<Vec<u8>> = conn.hget(structure, field)?;
        Ok(value)
    }

    fn write_field(
        &self,
        structure: &str,
        field: &str,
        value: &[u8],
        expiry_secs: u64,
    ) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let _: () = conn.hset(structure, field, value)?;
        if expiry_secs > 0 {
            debug!(structure, expiry_secs, "refresh hash expiry");
            let _: () = conn.expire(structure, expiry_secs as i64)?;
        }
        Ok(())
    }
}
