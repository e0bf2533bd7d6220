use crate::database::Database;
use crate::models::{RegistrationForm, User};

/// Хранилище пользователей поверх таблицы users.
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        UserRepository { db }
    }

    pub async fn find_all(&self) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, phone, password, registered_at
             FROM users
             ORDER BY id",
        )
        .fetch_all(&self.db.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, phone, password, registered_at
             FROM users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await
    }

    pub async fn find_by_email(&self, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, phone, password, registered_at
             FROM users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db.pool)
        .await
    }

    // Вставка новой строки; id и registered_at назначает база.
    // Нарушение уникальности email/phone уходит наверх как ошибка базы.
    pub async fn save(&self, form: &RegistrationForm) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, phone, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, email, phone, password, registered_at",
        )
        .bind(&form.username)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.password)
        .fetch_one(&self.db.pool)
        .await
    }

    pub async fn update(&self, user: &User) -> sqlx::Result<bool> {
        sqlx::query(
            "UPDATE users SET username = $1, email = $2, phone = $3, password = $4
             WHERE id = $5",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password)
        .bind(user.id)
        .execute(&self.db.pool)
        .await
        .map(|r| r.rows_affected() > 0)
    }

    pub async fn delete_by_id(&self, id: i32) -> sqlx::Result<bool> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await
            .map(|r| r.rows_affected() > 0)
    }
}
