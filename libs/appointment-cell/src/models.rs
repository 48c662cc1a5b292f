use serde::Deserialize;
use serde_json::Value;

use shared_models::AppError;
use shared_utils::json::{entity_id, is_present, present_text};

pub const INVALID_APPOINTMENT_DATA: &str = "Invalid appointment data";

/// Body of `POST /appointments`. Fields are only checked for presence, not
/// for type; ids that cannot name an entity fail as bad references.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_id: Option<Value>,
    pub doctor_id: Option<Value>,
    pub date: Option<Value>,
}

/// A request whose required fields are all present and whose ids are
/// well-formed. The ids may still point at nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSlot {
    pub patient_id: u64,
    pub doctor_id: u64,
    pub date: String,
}

impl CreateAppointmentRequest {
    /// Absent, `null`, `false`, `0` and `""` count as missing. A present id
    /// that is not a positive integer (`"1"`, `1.5`, `-1`, `true`) cannot
    /// match any entity.
    pub fn into_slot(self) -> Result<BookingSlot, AppointmentError> {
        let patient_id = self.patient_id.filter(is_present);
        let doctor_id = self.doctor_id.filter(is_present);
        let date = present_text(self.date);

        let (Some(patient_id), Some(doctor_id), Some(date)) = (patient_id, doctor_id, date) else {
            return Err(AppointmentError::MissingFields);
        };

        match (entity_id(&patient_id), entity_id(&doctor_id)) {
            (Some(patient_id), Some(doctor_id)) => Ok(BookingSlot {
                patient_id,
                doctor_id,
                date,
            }),
            _ => Err(AppointmentError::InvalidReference),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("patientId, doctorId, and date are required")]
    MissingFields,

    #[error("Invalid patientId or doctorId")]
    InvalidReference,

    #[error("Conflict: doctor or patient already booked at that time")]
    Conflict,

    #[error("Appointment not found")]
    NotFound,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        let message = err.to_string();
        match err {
            AppointmentError::MissingFields | AppointmentError::InvalidReference => {
                AppError::ValidationError(message)
            }
            AppointmentError::Conflict => AppError::Conflict(message),
            AppointmentError::NotFound => AppError::NotFound(message),
        }
    }
}
