use serde::Deserialize;
use serde_json::Value;

use shared_models::AppError;
use shared_utils::json::present_text;

pub const INVALID_PATIENT_DATA: &str = "Invalid patient data";

/// Body of `POST /patients` and `PUT /patients/{id}`. Fields are only
/// checked for presence, not for type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientPayload {
    pub name: Option<Value>,
    pub phone: Option<Value>,
}

impl PatientPayload {
    /// Both fields must be present: not absent, `null`, `false`, `0` or `""`.
    pub fn into_fields(self) -> Result<(String, String), AppError> {
        match (present_text(self.name), present_text(self.phone)) {
            (Some(name), Some(phone)) => Ok((name, phone)),
            _ => Err(PatientError::MissingFields.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found")]
    NotFound,

    #[error("Name and phone are required")]
    MissingFields,
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound => AppError::NotFound(err.to_string()),
            PatientError::MissingFields => AppError::ValidationError(err.to_string()),
        }
    }
}
