use crate::database::Database;
use crate::models::{NewShow, Show};

/// Хранилище сеансов поверх таблицы shows.
#[derive(Clone)]
pub struct ShowRepository {
    db: Database,
}

impl ShowRepository {
    pub fn new(db: Database) -> Self {
        ShowRepository { db }
    }

    pub async fn find_all(&self) -> sqlx::Result<Vec<Show>> {
        sqlx::query_as::<_, Show>(
            "SELECT id, name, description, poster_name
             FROM shows
             ORDER BY id",
        )
        .fetch_all(&self.db.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> sqlx::Result<Option<Show>> {
        sqlx::query_as::<_, Show>(
            "SELECT id, name, description, poster_name
             FROM shows
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await
    }

    pub async fn save(&self, show: &NewShow) -> sqlx::Result<Show> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (name, description, poster_name)
             VALUES ($1, $2, $3)
             RETURNING id, name, description, poster_name",
        )
        .bind(&show.name)
        .bind(&show.description)
        .bind(&show.poster_name)
        .fetch_one(&self.db.pool)
        .await
    }

    pub async fn update(&self, show: &Show) -> sqlx::Result<bool> {
        sqlx::query(
            "UPDATE shows SET name = $1, description = $2, poster_name = $3
             WHERE id = $4",
        )
        .bind(&show.name)
        .bind(&show.description)
        .bind(&show.poster_name)
        .bind(show.id)
        .execute(&self.db.pool)
        .await
        .map(|r| r.rows_affected() > 0)
    }

    pub async fn delete_by_id(&self, id: i32) -> sqlx::Result<bool> {
        sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await
            .map(|r| r.rows_affected() > 0)
    }
}
