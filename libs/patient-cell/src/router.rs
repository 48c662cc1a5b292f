use std::sync::Arc;

use axum::{routing::{get, put}, Router};

use shared_database::ClinicStore;
use shared_utils::routing::not_found;

use crate::handlers::*;

pub fn patient_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/patients", get(list_patients).post(create_patient).fallback(not_found))
        .route("/patients/{id}", put(update_patient).delete(delete_patient).fallback(not_found))
        .with_state(store)
}
