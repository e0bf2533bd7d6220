use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Купленный билет: одно место (ряд, кресло) одного сеанса за одним
/// пользователем. Пара (pos_row, cell) уникальна в пределах сеанса.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i32,
    pub show_id: i32,
    pub pos_row: i32,
    pub cell: i32,
    pub user_id: i32,
    pub sold_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub show_id: i32,
    pub pos_row: i32,
    pub cell: i32,
    pub user_id: i32,
}
