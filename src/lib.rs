pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod controllers;
pub mod middleware;

use std::sync::Arc;

use repository::{ShowRepository, TicketRepository, UserRepository};
use services::{BookingService, DraftStore, ShowService, TicketService, UserService};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub users: UserService,
    pub shows: ShowService,
    pub tickets: TicketService,
    pub booking: BookingService,
}

impl AppState {
    pub async fn new(config: config::Config) -> Result<Arc<Self>, sqlx::Error> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        let users = UserService::new(UserRepository::new(db.clone()));
        let shows = ShowService::new(
            config.hall.clone(),
            ShowRepository::new(db.clone()),
            TicketRepository::new(db.clone()),
        );
        let tickets = TicketService::new(TicketRepository::new(db.clone()));
        let booking = BookingService::new(shows.clone(), tickets.clone(), DraftStore::default());

        Ok(Arc::new(Self {
            db,
            config,
            users,
            shows,
            tickets,
            booking,
        }))
    }
}
