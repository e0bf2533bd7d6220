pub mod shows;
pub mod booking;
pub mod users;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(shows::routes())
        .merge(booking::routes())
        .merge(users::routes())
}
