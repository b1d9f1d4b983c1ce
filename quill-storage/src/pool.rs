//! Connection handling: one mutex-guarded write connection plus a small
//! round-robin read pool. WAL mode keeps readers unblocked by the writer.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use quill_core::errors::{QuillError, QuillResult, StorageError};

use crate::to_storage_err;

/// Default number of read connections.
const DEFAULT_READ_POOL_SIZE: usize = 2;

/// Maximum number of read connections.
const MAX_READ_POOL_SIZE: usize = 4;

/// Manages the single write connection and the read connections.
///
/// In-memory databases get no read pool — separate in-memory connections
/// are isolated databases, so all reads route through the writer.
pub struct ConnectionPool {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    next: AtomicUsize,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize) -> QuillResult<Self> {
        let writer = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_write_pragmas(&writer)?;

        let size = read_pool_size.clamp(1, MAX_READ_POOL_SIZE);
        let mut readers = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_with_flags(
                path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            apply_read_pragmas(&conn)?;
            readers.push(Mutex::new(conn));
        }

        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            next: AtomicUsize::new(0),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool (for testing). Reads route through the writer.
    pub fn open_in_memory() -> QuillResult<Self> {
        let writer = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_write_pragmas(&writer)?;
        Ok(Self {
            writer: Mutex::new(writer),
            readers: Vec::new(),
            next: AtomicUsize::new(0),
            db_path: None,
        })
    }

    /// Default read pool size.
    pub fn default_read_pool_size() -> usize {
        DEFAULT_READ_POOL_SIZE
    }

    /// Execute a closure with the write connection.
    pub fn with_writer<F, T>(&self, f: F) -> QuillResult<T>
    where
        F: FnOnce(&Connection) -> QuillResult<T>,
    {
        let guard = self.writer.lock().map_err(|e| {
            QuillError::from(StorageError::LockPoisoned {
                details: e.to_string(),
            })
        })?;
        f(&guard)
    }

    /// Execute a closure with a read connection (round-robin), falling back
    /// to the writer when no read pool exists (in-memory mode).
    pub fn with_reader<F, T>(&self, f: F) -> QuillResult<T>
    where
        F: FnOnce(&Connection) -> QuillResult<T>,
    {
        if self.readers.is_empty() {
            return self.with_writer(f);
        }
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let guard = self.readers[idx].lock().map_err(|e| {
            QuillError::from(StorageError::LockPoisoned {
                details: e.to_string(),
            })
        })?;
        f(&guard)
    }
}

/// Pragmas for the write connection: WAL, NORMAL sync, 5s busy_timeout,
/// foreign_keys ON.
fn apply_write_pragmas(conn: &Connection) -> QuillResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Pragmas safe on a read-only connection.
fn apply_read_pragmas(conn: &Connection) -> QuillResult<()> {
    conn.execute_batch("PRAGMA busy_timeout = 5000;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
