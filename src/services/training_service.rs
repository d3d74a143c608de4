use sqlx::SqlitePool;

use crate::models::Training;

/// Read-only access to the training catalog.
#[derive(Debug, Clone)]
pub struct TrainingService {
    db: SqlitePool,
}

impl TrainingService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Every training, in storage order.
    pub async fn get_trainings(&self) -> sqlx::Result<Vec<Training>> {
        sqlx::query_as::<_, Training>(
            "SELECT id, title, image, description, category, intensity, duration, group_size
             FROM trainings ORDER BY rowid",
        )
        .fetch_all(&self.db)
        .await
    }
}
