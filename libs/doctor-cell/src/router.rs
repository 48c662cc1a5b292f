use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::ClinicStore;
use shared_utils::routing::not_found;

use crate::handlers;

pub fn doctor_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors).fallback(not_found))
        .with_state(store)
}
