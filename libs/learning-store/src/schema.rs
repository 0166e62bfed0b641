//! SQLite schema definitions.

/// Key/value table holding JSON blobs.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS blobs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
