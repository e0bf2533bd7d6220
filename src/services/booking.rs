use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ServiceError;
use crate::models::{NewTicket, Show, Ticket};
use crate::services::{ShowService, TicketService};

/// Незавершенная покупка одного покупателя: выбранный сеанс, затем ряд,
/// затем место. Живет между запросами и исчезает при подтверждении или
/// отмене.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub show_id: i32,
    pub pos_row: Option<i32>,
    pub cell: Option<i32>,
}

impl BookingDraft {
    pub fn new(show_id: i32) -> Self {
        BookingDraft {
            show_id,
            pos_row: None,
            cell: None,
        }
    }

    /// Выбор ряда сбрасывает место, выбранное для другого ряда.
    pub fn select_row(&mut self, pos_row: i32) {
        self.pos_row = Some(pos_row);
        self.cell = None;
    }

    /// Место выбирается только после ряда.
    pub fn select_cell(&mut self, cell: i32) -> bool {
        if self.pos_row.is_none() {
            return false;
        }
        self.cell = Some(cell);
        true
    }

    /// Полностью выбранное место, если дошли до него.
    pub fn seat(&self) -> Option<(i32, i32)> {
        Some((self.pos_row?, self.cell?))
    }

    /// Возврат к выбору места после проигранной гонки: сеанс остается.
    pub fn drop_seat(&mut self) {
        self.pos_row = None;
        self.cell = None;
    }
}

/// Черновики бронирований, по одному на пользователя.
#[derive(Clone, Default)]
pub struct DraftStore {
    inner: Arc<RwLock<HashMap<i32, BookingDraft>>>,
}

impl DraftStore {
    pub async fn put(&self, user_id: i32, draft: BookingDraft) {
        self.inner.write().await.insert(user_id, draft);
    }

    pub async fn get(&self, user_id: i32) -> Option<BookingDraft> {
        self.inner.read().await.get(&user_id).cloned()
    }

    pub async fn remove(&self, user_id: i32) -> Option<BookingDraft> {
        self.inner.write().await.remove(&user_id)
    }
}

/// Пошаговый процесс покупки: сеанс -> ряд -> место -> подтверждение.
///
/// Промежуточные шаги верят предложенным спискам и повторно ничего не
/// проверяют; решающая проверка занятости места происходит при
/// подтверждении, на уникальном индексе базы.
#[derive(Clone)]
pub struct BookingService {
    shows: ShowService,
    tickets: TicketService,
    drafts: DraftStore,
}

impl BookingService {
    pub fn new(shows: ShowService, tickets: TicketService, drafts: DraftStore) -> Self {
        BookingService {
            shows,
            tickets,
            drafts,
        }
    }

    /// Шаг 1: выбор сеанса. Прошлый черновик, если был, замещается.
    pub async fn select_show(
        &self,
        user_id: i32,
        show_id: i32,
    ) -> Result<(Show, Vec<i32>), ServiceError> {
        let show = self.shows.find_by_id(show_id).await?;
        let rows = self.shows.free_rows(show_id).await?;
        self.drafts.put(user_id, BookingDraft::new(show_id)).await;
        Ok((show, rows))
    }

    /// Шаг 2: выбор ряда, в ответ - свободные места в нем.
    pub async fn select_row(&self, user_id: i32, pos_row: i32) -> Result<Vec<i32>, ServiceError> {
        let mut draft = self
            .drafts
            .get(user_id)
            .await
            .ok_or(ServiceError::NoActiveBooking)?;
        let cells = self.shows.free_cells(draft.show_id, pos_row).await?;
        draft.select_row(pos_row);
        self.drafts.put(user_id, draft).await;
        Ok(cells)
    }

    /// Шаг 3: выбор места.
    pub async fn select_cell(&self, user_id: i32, cell: i32) -> Result<BookingDraft, ServiceError> {
        let mut draft = self
            .drafts
            .get(user_id)
            .await
            .ok_or(ServiceError::NoActiveBooking)?;
        if !draft.select_cell(cell) {
            return Err(ServiceError::NoActiveBooking);
        }
        self.drafts.put(user_id, draft.clone()).await;
        Ok(draft)
    }

    /// Шаг 4: подтверждение. Успех забирает черновик; занятое место
    /// возвращает покупателя к выбору ряда в том же сеансе.
    pub async fn confirm(&self, user_id: i32) -> Result<Ticket, ServiceError> {
        let draft = self
            .drafts
            .get(user_id)
            .await
            .ok_or(ServiceError::NoActiveBooking)?;
        let (pos_row, cell) = draft.seat().ok_or(ServiceError::NoActiveBooking)?;
        let ticket = NewTicket {
            show_id: draft.show_id,
            pos_row,
            cell,
            user_id,
        };
        match self.tickets.buy(&ticket).await {
            Ok(sold) => {
                let _ = self.drafts.remove(user_id).await;
                Ok(sold)
            }
            Err(ServiceError::SeatUnavailable) => {
                let mut draft = draft;
                draft.drop_seat();
                self.drafts.put(user_id, draft).await;
                Err(ServiceError::SeatUnavailable)
            }
            Err(e) => Err(e),
        }
    }

    /// Отмена в любой момент: черновик просто выбрасывается.
    pub async fn cancel(&self, user_id: i32) {
        let _ = self.drafts.remove(user_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_walks_show_row_cell_in_order() {
        let mut draft = BookingDraft::new(1);
        assert_eq!(draft.seat(), None);

        draft.select_row(3);
        assert_eq!(draft.seat(), None);

        assert!(draft.select_cell(5));
        assert_eq!(draft.seat(), Some((3, 5)));
    }

    #[test]
    fn cell_cannot_be_selected_before_row() {
        let mut draft = BookingDraft::new(1);
        assert!(!draft.select_cell(5));
        assert_eq!(draft.cell, None);
    }

    #[test]
    fn reselecting_a_row_clears_the_stale_cell() {
        let mut draft = BookingDraft::new(1);
        draft.select_row(3);
        assert!(draft.select_cell(5));

        draft.select_row(4);
        assert_eq!(draft.cell, None);
        assert_eq!(draft.seat(), None);
    }

    #[test]
    fn lost_seat_race_keeps_the_show() {
        let mut draft = BookingDraft::new(7);
        draft.select_row(3);
        assert!(draft.select_cell(5));

        draft.drop_seat();
        assert_eq!(draft.show_id, 7);
        assert_eq!(draft.seat(), None);
    }

    #[tokio::test]
    async fn store_keeps_one_draft_per_user() {
        let store = DraftStore::default();
        store.put(1, BookingDraft::new(10)).await;
        store.put(2, BookingDraft::new(20)).await;
        store.put(1, BookingDraft::new(30)).await;

        assert_eq!(store.get(1).await, Some(BookingDraft::new(30)));
        assert_eq!(store.get(2).await, Some(BookingDraft::new(20)));
        assert_eq!(store.get(3).await, None);
    }

    #[tokio::test]
    async fn cancel_discards_the_draft() {
        let store = DraftStore::default();
        store.put(1, BookingDraft::new(10)).await;
        assert!(store.remove(1).await.is_some());
        assert_eq!(store.get(1).await, None);
    }
}
