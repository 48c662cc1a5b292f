use std::sync::Arc;

use axum::{extract::State, Json};

use shared_database::ClinicStore;
use shared_models::Doctor;

use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn list_doctors(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Doctor>> {
    let service = DoctorService::new(&store);
    Json(service.list_doctors().await)
}
