use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    Json,
};

use shared_database::ClinicStore;
use shared_models::{Appointment, AppError, DeleteResponse};
use shared_utils::{json::parse_json_body, path::path_id_from_uri};

use crate::models::{CreateAppointmentRequest, INVALID_APPOINTMENT_DATA};
use crate::services::BookingService;

#[axum::debug_handler]
pub async fn list_appointments(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Appointment>> {
    let service = BookingService::new(&store);
    Json(service.list_appointments().await)
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Arc<ClinicStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let service = BookingService::new(&store);
    let request: CreateAppointmentRequest = parse_json_body(&body, INVALID_APPOINTMENT_DATA)?;

    let appointment = service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(store): State<Arc<ClinicStore>>,
    uri: Uri,
) -> Result<Json<DeleteResponse>, AppError> {
    let service = BookingService::new(&store);

    service.delete_appointment(path_id_from_uri(&uri)?).await?;

    Ok(Json(DeleteResponse::ok()))
}
