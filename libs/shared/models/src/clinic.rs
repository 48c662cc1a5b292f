use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub phone: String,
}

/// A booked slot. `patient_name` and `doctor_name` are copied at booking
/// time and not kept in sync with later edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub patient_id: u64,
    pub patient_name: String,
    pub doctor_id: u64,
    pub doctor_name: String,
    pub date: String,
}

/// An appointment that passed validation but has no id yet.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: u64,
    pub patient_name: String,
    pub doctor_id: u64,
    pub doctor_name: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
