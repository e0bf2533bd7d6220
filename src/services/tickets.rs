use crate::error::{is_unique_violation, ServiceError};
use crate::models::{NewTicket, Ticket};
use crate::repository::TicketRepository;

/// Сервис билетов. Продажа - единственная операция потока бронирования;
/// update/delete существуют для полноты CRUD и потоком не используются.
#[derive(Clone)]
pub struct TicketService {
    tickets: TicketRepository,
}

impl TicketService {
    pub fn new(tickets: TicketRepository) -> Self {
        TicketService { tickets }
    }

    pub async fn find_all(&self) -> Result<Vec<Ticket>, ServiceError> {
        Ok(self.tickets.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Ticket, ServiceError> {
        self.tickets
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Билет с id = {id} не найден")))
    }

    /// Продажа места. Проигранная гонка за место (нарушение уникального
    /// индекса) возвращается как SeatUnavailable.
    pub async fn buy(&self, ticket: &NewTicket) -> Result<Ticket, ServiceError> {
        match self.tickets.save(ticket).await {
            Ok(saved) => Ok(saved),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(
                    "seat ({}, {}) of show {} already taken",
                    ticket.pos_row,
                    ticket.cell,
                    ticket.show_id
                );
                Err(ServiceError::SeatUnavailable)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&self, ticket: &Ticket) -> Result<(), ServiceError> {
        if !self.tickets.update(ticket).await? {
            return Err(ServiceError::NotFound(format!(
                "Билет с id = {} не найден",
                ticket.id
            )));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.tickets.delete_by_id(id).await? {
            return Err(ServiceError::NotFound(format!("Билет с id = {id} не найден")));
        }
        Ok(())
    }
}
