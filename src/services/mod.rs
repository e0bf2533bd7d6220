pub mod booking;
pub mod shows;
pub mod tickets;
pub mod users;

pub use booking::{BookingDraft, BookingService, DraftStore};
pub use shows::ShowService;
pub use tickets::TicketService;
pub use users::UserService;
