use sqlx::SqlitePool;

use crate::error::{Result, StorageError};

const CREATE_SCORES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS scores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        programme_code TEXT NOT NULL,
        student_id TEXT NOT NULL,
        student_name TEXT NOT NULL,
        score REAL NOT NULL,
        remarks TEXT NOT NULL DEFAULT '',
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_REPLACEMENT_TABLE: &str = r#"
    CREATE TABLE scores_migrated (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        programme_code TEXT NOT NULL,
        student_id TEXT NOT NULL,
        student_name TEXT NOT NULL,
        score REAL NOT NULL,
        remarks TEXT NOT NULL DEFAULT '',
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Column that only exists in the legacy table layout.
const LEGACY_JUDGE_COLUMN: &str = "judge_name";

/// Create the scores table if it does not exist yet. Safe to call repeatedly.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_SCORES_TABLE).execute(pool).await?;
    Ok(())
}

/// Column names of the `scores` table, empty when the table is absent.
pub async fn scores_columns(pool: &SqlitePool) -> Result<Vec<String>> {
    let columns = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info('scores')")
        .fetch_all(pool)
        .await?;

    Ok(columns)
}

/// Rebuild a legacy `scores` table that still carries judge attribution.
///
/// The replacement table is built and filled next to the legacy table, then swapped
/// in by rename inside a single transaction, so a failure leaves the legacy table
/// untouched. Ids and the AUTOINCREMENT sequence are carried over so that no id
/// is handed out twice. Returns `Ok(false)` when there is nothing to migrate.
///
/// Callers are expected to log and discard the error: a failed migration must
/// never keep the application from starting.
pub async fn migrate_legacy_schema(pool: &SqlitePool) -> Result<bool> {
    let columns = scores_columns(pool).await?;
    if !columns.iter().any(|c| c == LEGACY_JUDGE_COLUMN) {
        return Ok(false);
    }

    tracing::info!("Legacy scores table detected, rebuilding without {}", LEGACY_JUDGE_COLUMN);

    let mut tx = pool.begin().await?;

    // sqlite_sequence only exists once some AUTOINCREMENT table has been created
    let has_sequence: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence')",
    )
    .fetch_one(&mut *tx)
    .await?;

    let legacy_seq: Option<i64> = if has_sequence {
        sqlx::query_scalar("SELECT seq FROM sqlite_sequence WHERE name = 'scores'")
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StorageError::SchemaMigration(format!("read id sequence: {}", e)))?
    } else {
        None
    };

    sqlx::query(CREATE_REPLACEMENT_TABLE)
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::SchemaMigration(format!("create replacement table: {}", e)))?;

    let copied = sqlx::query(
        r#"
        INSERT INTO scores_migrated
            (id, programme_code, student_id, student_name, score, remarks, created_at)
        SELECT id, programme_code, student_id, student_name, score,
               COALESCE(remarks, ''), COALESCE(created_at, CURRENT_TIMESTAMP)
        FROM scores
        "#,
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| StorageError::SchemaMigration(format!("copy rows: {}", e)))?
    .rows_affected();

    sqlx::query("DROP TABLE scores")
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::SchemaMigration(format!("drop legacy table: {}", e)))?;

    sqlx::query("ALTER TABLE scores_migrated RENAME TO scores")
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::SchemaMigration(format!("rename replacement table: {}", e)))?;

    if let Some(seq) = legacy_seq {
        sqlx::query("UPDATE sqlite_sequence SET seq = ?1 WHERE name = 'scores' AND seq < ?1")
            .bind(seq)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!("Migrated {} legacy score rows", copied);

    Ok(true)
}
