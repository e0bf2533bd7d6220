use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Show {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub poster_name: String,
}

// Данные для административного создания сеанса
#[derive(Debug, Clone, Deserialize)]
pub struct NewShow {
    pub name: String,
    pub description: String,
    pub poster_name: String,
}
