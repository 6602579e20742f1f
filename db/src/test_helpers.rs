use tempfile::TempDir;

use crate::{pool_from_url, run_migrations, DbPool};

/// Fresh migrated database in a temp dir. Keep the `TempDir` alive for the
/// duration of the test, the file goes away with it.
pub fn test_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polls.sqlite3");
    let pool = pool_from_url(path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();

    (dir, pool)
}
