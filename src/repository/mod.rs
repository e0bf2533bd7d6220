pub mod users;
pub mod shows;
pub mod tickets;

pub use users::UserRepository;
pub use shows::ShowRepository;
pub use tickets::TicketRepository;
