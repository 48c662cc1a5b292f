use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};

use shared_database::ClinicStore;
use shared_utils::routing::not_found;

use crate::handlers;

pub fn appointment_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(handlers::list_appointments)
                .post(handlers::book_appointment)
                .fallback(not_found),
        )
        .route(
            "/appointments/{appointment_id}",
            delete(handlers::delete_appointment).fallback(not_found),
        )
        .with_state(store)
}
