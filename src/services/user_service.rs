use sqlx::SqlitePool;

use crate::models::User;

#[derive(Debug, Clone)]
pub struct UserService {
    db: SqlitePool,
}

impl UserService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Insert a user with an already-hashed password.
    pub async fn create_user(&self, email: &str, password_hash: &str) -> sqlx::Result<User> {
        let id = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(email)
            .bind(password_hash)
            .execute(&self.db)
            .await?
            .last_insert_rowid();

        Ok(User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT id, email, password FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_user_by_email(&self, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT id, email, password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn count_users(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await
    }
}
