use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    Json,
};

use shared_database::ClinicStore;
use shared_models::{AppError, DeleteResponse, Patient};
use shared_utils::{json::parse_json_body, path::path_id_from_uri};

use crate::models::{PatientPayload, INVALID_PATIENT_DATA};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn list_patients(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Patient>> {
    let service = PatientService::new(&store);
    Json(service.list_patients().await)
}

#[axum::debug_handler]
pub async fn create_patient(
    State(store): State<Arc<ClinicStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    let service = PatientService::new(&store);
    let payload: PatientPayload = parse_json_body(&body, INVALID_PATIENT_DATA)?;

    let patient = service.create_patient(payload).await?;

    Ok((StatusCode::CREATED, Json(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(store): State<Arc<ClinicStore>>,
    uri: Uri,
    body: Bytes,
) -> Result<Json<Patient>, AppError> {
    let service = PatientService::new(&store);

    // An unknown patient is reported before the body is looked at.
    let patient_id = service.ensure_exists(path_id_from_uri(&uri)?).await?;
    let payload: PatientPayload = parse_json_body(&body, INVALID_PATIENT_DATA)?;

    let patient = service.update_patient(patient_id, payload).await?;

    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(store): State<Arc<ClinicStore>>,
    uri: Uri,
) -> Result<Json<DeleteResponse>, AppError> {
    let service = PatientService::new(&store);

    service.delete_patient(path_id_from_uri(&uri)?).await?;

    Ok(Json(DeleteResponse::ok()))
}
