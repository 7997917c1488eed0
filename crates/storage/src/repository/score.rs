use sqlx::SqlitePool;

use crate::dto::score::NewScoreEntry;
use crate::error::Result;
use crate::models::{ScoreEntry, StudentTotal};

pub struct ScoreRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new entry; id and timestamp are assigned by SQLite
    pub async fn insert(&self, entry: &NewScoreEntry) -> Result<ScoreEntry> {
        let created = sqlx::query_as::<_, ScoreEntry>(
            r#"
            INSERT INTO scores (programme_code, student_id, student_name, score, remarks)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, programme_code, student_id, student_name, score, remarks, created_at
            "#,
        )
        .bind(&entry.programme_code)
        .bind(&entry.student_id)
        .bind(&entry.student_name)
        .bind(entry.score)
        .bind(&entry.remarks)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Delete an entry by id, returning how many rows went away (0 or 1)
    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM scores WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Newest entries first; entries sharing a timestamp are ordered by id
    pub async fn query_recent(&self, limit: u32) -> Result<Vec<ScoreEntry>> {
        let entries = sqlx::query_as::<_, ScoreEntry>(
            r#"
            SELECT id, programme_code, student_id, student_name, score, remarks, created_at
            FROM scores
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Summed score per (student_id, student_name), highest total first
    pub async fn query_totals(&self) -> Result<Vec<StudentTotal>> {
        let totals = sqlx::query_as::<_, StudentTotal>(
            r#"
            SELECT student_id, student_name, CAST(SUM(score) AS REAL) AS total
            FROM scores
            GROUP BY student_id, student_name
            ORDER BY total DESC, student_id ASC, student_name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use crate::schema::ensure_schema;

    async fn setup() -> Database {
        let db = Database::in_memory().await.unwrap();
        ensure_schema(db.pool()).await.unwrap();
        db
    }

    fn entry(programme: &str, student_id: &str, name: &str, score: f64) -> NewScoreEntry {
        NewScoreEntry {
            programme_code: programme.to_string(),
            student_id: student_id.to_string(),
            student_name: name.to_string(),
            score,
            remarks: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());

        let first = repo.insert(&entry("QUIZ1", "S1", "Alice", 8.5)).await.unwrap();
        let second = repo.insert(&entry("QUIZ1", "S2", "Bilal", 6.0)).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.remarks, "");
        assert_eq!(first.score, 8.5);
    }

    #[tokio::test]
    async fn test_recent_orders_same_timestamp_by_id() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());

        for i in 0..5 {
            repo.insert(&entry("SONG", &format!("S{i}"), "Student", f64::from(i)))
                .await
                .unwrap();
        }

        let recent = repo.query_recent(3).await.unwrap();
        let ids: Vec<i64> = recent.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[tokio::test]
    async fn test_recent_prefers_later_timestamp_over_id() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());

        sqlx::query(
            r#"
            INSERT INTO scores (programme_code, student_id, student_name, score, created_at)
            VALUES ('SONG', 'S1', 'Alice', 1.0, '2030-01-01 00:00:00')
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();
        repo.insert(&entry("SONG", "S2", "Bilal", 2.0)).await.unwrap();

        let recent = repo.query_recent(10).await.unwrap();
        assert_eq!(recent[0].student_id, "S1");
        assert_eq!(recent[1].student_id, "S2");
    }

    #[tokio::test]
    async fn test_delete_missing_id_removes_nothing() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());
        repo.insert(&entry("QUIZ1", "S1", "Alice", 8.5)).await.unwrap();

        assert_eq!(repo.delete_by_id(42).await.unwrap(), 0);
        assert_eq!(repo.query_recent(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());

        let first = repo.insert(&entry("QUIZ1", "S1", "Alice", 8.5)).await.unwrap();
        assert_eq!(repo.delete_by_id(first.id).await.unwrap(), 1);

        let second = repo.insert(&entry("QUIZ1", "S1", "Alice", 8.5)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_totals_group_by_id_and_name() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());

        repo.insert(&entry("QUIZ1", "S1", "Alice", 8.5)).await.unwrap();
        repo.insert(&entry("QUIZ2", "S1", "Alice", 7.0)).await.unwrap();
        repo.insert(&entry("QUIZ1", "S1", "Alicia", 3.0)).await.unwrap();
        repo.insert(&entry("QUIZ1", "S2", "Bilal", 20.0)).await.unwrap();
        repo.insert(&entry("QUIZ2", "S3", "Chen", -1.5)).await.unwrap();

        let totals = repo.query_totals().await.unwrap();
        let rows: Vec<(&str, &str, f64)> = totals
            .iter()
            .map(|t| (t.student_id.as_str(), t.student_name.as_str(), t.total))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("S2", "Bilal", 20.0),
                ("S1", "Alice", 15.5),
                ("S1", "Alicia", 3.0),
                ("S3", "Chen", -1.5),
            ]
        );
    }

    #[tokio::test]
    async fn test_totals_tie_order_is_stable() {
        let db = setup().await;
        let repo = ScoreRepository::new(db.pool());

        repo.insert(&entry("QUIZ1", "S9", "Zara", 5.0)).await.unwrap();
        repo.insert(&entry("QUIZ1", "S1", "Alice", 5.0)).await.unwrap();

        let totals = repo.query_totals().await.unwrap();
        assert_eq!(totals[0].student_id, "S1");
        assert_eq!(totals[1].student_id, "S9");
    }
}
