use seedstock_core::ServiceError;
use seedstock_sql::SQLStore;

/// SQL DDL for the four entry tables.
///
/// Each table stores the full JSON document in a `data` TEXT column, with
/// the required fields extracted into NOT NULL columns so a submission
/// missing one surfaces as a constraint error (there is no separate
/// server-side domain validation).
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS inward (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        seed_name TEXT NOT NULL,
        quantity REAL NOT NULL,
        party TEXT NOT NULL,
        date TEXT NOT NULL,
        notes TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS outward (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        seed_name TEXT NOT NULL,
        quantity REAL NOT NULL,
        party TEXT NOT NULL,
        date TEXT NOT NULL,
        notes TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS returns (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        seed_name TEXT NOT NULL,
        quantity REAL NOT NULL,
        reason TEXT NOT NULL,
        date TEXT NOT NULL,
        notes TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS expiry (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        seed_name TEXT NOT NULL,
        quantity REAL NOT NULL,
        expiry_date TEXT NOT NULL,
        action TEXT NOT NULL,
        date TEXT NOT NULL,
        notes TEXT,
        created_at TEXT NOT NULL
    )",
    // Listing is always newest-first.
    "CREATE INDEX IF NOT EXISTS idx_inward_created ON inward(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_outward_created ON outward(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_returns_created ON returns(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_expiry_created ON expiry(created_at)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}
