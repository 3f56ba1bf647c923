use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Columns the engine reads from each ledger table.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("projects", &["id", "name", "refresh_interval"]),
    ("blocks", &["id", "project_id", "name", "target_minutes"]),
    ("entries", &["id", "block_id", "minutes", "date"]),
];

/// Unique keys the `ON CONFLICT` inserts rely on.
const REQUIRED_UNIQUE: &[(&str, &[&str])] = &[
    ("projects", &["name"]),
    ("blocks", &["project_id", "name"]),
];

/// Cascading foreign keys as (child table, column, parent table).
const REQUIRED_CASCADES: &[(&str, &str, &str)] = &[
    ("blocks", "project_id", "projects"),
    ("entries", "block_id", "blocks"),
];

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let cols = stmt.query_map([table], |row| row.get::<_, String>(0))?;
    cols.collect()
}

/// Column lists of every full (non-partial) unique index on `table`.
/// Expression columns come back as empty strings.
fn unique_keys(conn: &Connection, table: &str) -> Result<Vec<Vec<String>>> {
    let mut list = conn.prepare(
        "SELECT name FROM pragma_index_list(?1) WHERE \"unique\" = 1 AND partial = 0",
    )?;
    let indexes = list
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>>>()?;

    let mut info = conn.prepare("SELECT COALESCE(name, '') FROM pragma_index_info(?1)")?;
    let mut keys = Vec::with_capacity(indexes.len());
    for index in &indexes {
        let mut cols = info
            .query_map([index], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>>>()?;
        cols.sort();
        keys.push(cols);
    }
    Ok(keys)
}

fn has_cascade(conn: &Connection, child: &str, column: &str, parent: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM pragma_foreign_key_list(?1)
             WHERE \"from\" = ?2
               AND \"table\" = ?3 COLLATE NOCASE
               AND on_delete = 'CASCADE'",
            params![child, column, parent],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Create the three ledger tables and their indexes when missing.
fn create_ledger_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL UNIQUE,
            refresh_interval TEXT NOT NULL DEFAULT '7d'
        );

        CREATE TABLE IF NOT EXISTS blocks (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id     INTEGER NOT NULL,
            name           TEXT NOT NULL,
            target_minutes INTEGER NOT NULL DEFAULT 60 CHECK(target_minutes >= 0),
            UNIQUE(project_id, name),
            FOREIGN KEY(project_id) REFERENCES projects(id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS entries (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            block_id INTEGER NOT NULL,
            minutes  INTEGER NOT NULL CHECK(minutes >= 0),
            date     TEXT NOT NULL,
            FOREIGN KEY(block_id) REFERENCES blocks(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_blocks_project ON blocks(project_id);
        CREATE INDEX IF NOT EXISTS idx_entries_block_date ON entries(block_id, date);
        "#,
    )?;
    Ok(())
}

/// Ledgers written before refresh intervals existed lack the column on `projects`.
fn migrate_add_refresh_interval(conn: &Connection) -> Result<()> {
    let version = "0001_add_refresh_interval";

    if !table_exists(conn, "projects")? {
        return Ok(());
    }
    if table_columns(conn, "projects")?
        .iter()
        .any(|c| c == "refresh_interval")
    {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE projects ADD COLUMN refresh_interval TEXT NOT NULL DEFAULT '7d'",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added refresh_interval to projects')",
        [version],
    )?;

    log::info!("migration applied: {version}");
    Ok(())
}

/// An existing table missing a required column, unique key or cascading
/// foreign key cannot be used as-is.
fn check_existing_tables(conn: &Connection) -> AppResult<()> {
    let mut problems: Vec<String> = Vec::new();

    for (table, required) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            continue;
        }

        let cols = table_columns(conn, table)?;
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|r| !cols.iter().any(|c| c == r))
            .collect();

        if !missing.is_empty() {
            problems.push(format!(
                "table '{}' lacks column(s): {}",
                table,
                missing.join(", ")
            ));
        }
    }

    for (table, key) in REQUIRED_UNIQUE {
        if !table_exists(conn, table)? {
            continue;
        }

        let mut wanted: Vec<String> = key.iter().map(|c| c.to_string()).collect();
        wanted.sort();
        if !unique_keys(conn, table)?.contains(&wanted) {
            problems.push(format!("table '{}' lacks UNIQUE({})", table, key.join(", ")));
        }
    }

    for (child, column, parent) in REQUIRED_CASCADES {
        if !table_exists(conn, child)? {
            continue;
        }

        if !has_cascade(conn, child, column, parent)? {
            problems.push(format!(
                "table '{child}' lacks FOREIGN KEY({column}) REFERENCES {parent} ON DELETE CASCADE"
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Schema(format!(
            "existing schema is incompatible: {}",
            problems.join("; ")
        )))
    }
}

/// Public entry point: bring the ledger schema up to date.
///
/// Invoked by `db::initialize::init_db()` on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let schema = |e: rusqlite::Error| AppError::Schema(e.to_string());

    // 1) Internal log table
    ensure_log_table(conn).map_err(schema)?;

    // 2) Additive upgrades of older ledgers
    migrate_add_refresh_interval(conn).map_err(schema)?;

    // 3) Refuse tables that cannot serve the engine
    check_existing_tables(conn).map_err(|e| match e {
        AppError::Db(db) => schema(db),
        other => other,
    })?;

    // 4) Create whatever is still missing
    create_ledger_tables(conn).map_err(schema)?;

    Ok(())
}
