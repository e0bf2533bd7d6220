use crate::database::Database;
use crate::models::{NewTicket, Ticket};

/// Хранилище билетов поверх таблицы tickets.
///
/// Уникальность места обеспечивает индекс (show_id, pos_row, cell):
/// повторная вставка того же места падает нарушением уникальности,
/// которое сервисный слой переводит в SeatUnavailable.
#[derive(Clone)]
pub struct TicketRepository {
    db: Database,
}

impl TicketRepository {
    pub fn new(db: Database) -> Self {
        TicketRepository { db }
    }

    pub async fn find_all(&self) -> sqlx::Result<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT id, show_id, pos_row, cell, user_id, sold_at
             FROM tickets
             ORDER BY id",
        )
        .fetch_all(&self.db.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> sqlx::Result<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT id, show_id, pos_row, cell, user_id, sold_at
             FROM tickets
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await
    }

    /// Все билеты одного сеанса - единственный потребитель расчет
    /// свободных мест.
    pub async fn find_all_by_show_id(&self, show_id: i32) -> sqlx::Result<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT id, show_id, pos_row, cell, user_id, sold_at
             FROM tickets
             WHERE show_id = $1
             ORDER BY pos_row, cell",
        )
        .bind(show_id)
        .fetch_all(&self.db.pool)
        .await
    }

    pub async fn save(&self, ticket: &NewTicket) -> sqlx::Result<Ticket> {
        sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (show_id, pos_row, cell, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, show_id, pos_row, cell, user_id, sold_at",
        )
        .bind(ticket.show_id)
        .bind(ticket.pos_row)
        .bind(ticket.cell)
        .bind(ticket.user_id)
        .fetch_one(&self.db.pool)
        .await
    }

    pub async fn update(&self, ticket: &Ticket) -> sqlx::Result<bool> {
        sqlx::query(
            "UPDATE tickets SET show_id = $1, pos_row = $2, cell = $3, user_id = $4
             WHERE id = $5",
        )
        .bind(ticket.show_id)
        .bind(ticket.pos_row)
        .bind(ticket.cell)
        .bind(ticket.user_id)
        .bind(ticket.id)
        .execute(&self.db.pool)
        .await
        .map(|r| r.rows_affected() > 0)
    }

    pub async fn delete_by_id(&self, id: i32) -> sqlx::Result<bool> {
        sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await
            .map(|r| r.rows_affected() > 0)
    }
}
