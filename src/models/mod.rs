pub mod user;
pub mod show;
pub mod ticket;

pub use user::{LoginForm, RegistrationForm, User};
pub use show::{NewShow, Show};
pub use ticket::{NewTicket, Ticket};
